//! Persisted session slots on `localStorage`.
//!
//! The access token and the serialized profile survive a reload and are
//! read back when the session state is constructed. Requires a browser
//! environment; host builds see empty slots and no-op writes.
//!
//! Every session mutation (login, logout, 401 handling) must keep these
//! slots consistent with the in-memory session state.

use crate::net::types::User;

#[cfg(feature = "csr")]
const TOKEN_KEY: &str = "access_token";
#[cfg(feature = "csr")]
const USER_KEY: &str = "user";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted access token.
pub fn token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist or clear the access token.
pub fn set_token(token: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            match token {
                Some(token) => {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
                None => {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Read the persisted user profile.
pub fn user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        storage()
            .and_then(|s| s.get_item(USER_KEY).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist or clear the user profile.
pub fn set_user(user: Option<&User>) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            match user.and_then(|u| serde_json::to_string(u).ok()) {
                Some(raw) => {
                    let _ = storage.set_item(USER_KEY, &raw);
                }
                None => {
                    let _ = storage.remove_item(USER_KEY);
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}
