#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::persist;

/// The current session: token and profile. Authenticated means both are
/// present. The persisted slots and this in-memory state are kept
/// consistent by every mutator below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// Rebuild the session from the persisted slots, so a reload keeps
    /// the user logged in.
    pub fn restore() -> Self {
        Self { token: persist::token(), user: persist::user() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Drop to a fully logged-out state, in memory and on disk.
pub fn clear_session(session: RwSignal<SessionState>) {
    persist::set_token(None);
    persist::set_user(None);
    session.update(|s| {
        s.token = None;
        s.user = None;
    });
}

/// Shared error funnel: a 401 from any call means the session is dead,
/// so clear it. The top-level watcher in `app` owns the redirect.
pub fn handle_api_error(session: RwSignal<SessionState>, err: &ApiError) {
    if *err == ApiError::Unauthorized {
        clear_session(session);
    }
}

/// Exchange credentials for a token, then fetch the profile. If either
/// step fails the session rolls back to fully logged-out before the
/// error is re-raised.
pub async fn login<A: Api>(
    session: RwSignal<SessionState>,
    api: &A,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    match api.login(email, password).await {
        Ok(token) => {
            persist::set_token(Some(&token));
            session.update(|s| s.token = Some(token));
        }
        Err(e) => {
            clear_session(session);
            leptos::logging::warn!("login failed: {e}");
            return Err(e);
        }
    }
    // fetch_user rolls back on failure.
    fetch_user(session, api).await
}

/// Refresh the profile for the held token. No-op without a token; a
/// failure forces a full logout and re-raises.
pub async fn fetch_user<A: Api>(
    session: RwSignal<SessionState>,
    api: &A,
) -> Result<(), ApiError> {
    if session.get_untracked().token.is_none() {
        return Ok(());
    }
    match api.fetch_me().await {
        Ok(user) => {
            persist::set_user(Some(&user));
            session.update(|s| s.user = Some(user));
            Ok(())
        }
        Err(e) => {
            leptos::logging::warn!("failed to fetch user: {e}");
            clear_session(session);
            Err(e)
        }
    }
}

/// Log out server-side first; local state is only cleared once the
/// server confirms. A failed logout leaves the session untouched and
/// raises `LogoutFailed` — except for a 401, where the session is
/// already dead and the shared funnel clears it anyway.
pub async fn logout<A: Api>(session: RwSignal<SessionState>, api: &A) -> Result<(), ApiError> {
    match api.logout().await {
        Ok(()) => {
            clear_session(session);
            Ok(())
        }
        Err(e) => {
            handle_api_error(session, &e);
            leptos::logging::warn!("logout failed: {e}");
            Err(ApiError::LogoutFailed(e.to_string()))
        }
    }
}
