//! Navigation guard: one decision per navigation attempt.
//!
//! Rules run in order and each is terminal — in particular, a failed
//! profile hydration redirects to login without evaluating the later
//! rules against half-cleared state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::net::api::Api;
use crate::router::routes::{RouteMeta, RouteName};
use crate::state::session::{self, SessionState};

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    RedirectLogin,
    RedirectHome,
}

/// Evaluate the guard for a navigation to `target`.
///
/// 1. A token without a loaded profile hydrates the profile first;
///    failure clears the session and short-circuits to login.
/// 2. Auth-required route without an authenticated session → login.
/// 3. Role allow-list present, current role not a member → home.
/// 4. Login route while already authenticated → home.
/// 5. Otherwise proceed.
pub async fn evaluate<A: Api>(
    target: &RouteMeta,
    session: RwSignal<SessionState>,
    api: &A,
) -> GuardOutcome {
    let snapshot = session.get_untracked();
    if snapshot.token.is_some() && snapshot.user.is_none() {
        if session::fetch_user(session, api).await.is_err() {
            return GuardOutcome::RedirectLogin;
        }
    }

    let snapshot = session.get_untracked();
    let authenticated = snapshot.is_authenticated();

    if target.requires_auth && !authenticated {
        return GuardOutcome::RedirectLogin;
    }
    if !target.roles.is_empty() {
        match snapshot.role() {
            Some(role) if target.roles.contains(&role) => {}
            _ => return GuardOutcome::RedirectHome,
        }
    }
    if target.name == RouteName::Login && authenticated {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Proceed
}
