use super::*;
use crate::net::test_api::user;
use crate::net::types::Role;

// =============================================================
// Forced-logout trigger
// =============================================================

#[test]
fn missing_token_on_a_protected_route_forces_login() {
    let state = SessionState::default();
    assert!(must_redirect_to_login(&state, "/home"));
    assert!(must_redirect_to_login(&state, "/expenses/42"));
}

#[test]
fn missing_token_on_a_public_route_does_not_redirect() {
    let state = SessionState::default();
    assert!(!must_redirect_to_login(&state, "/login"));
    assert!(!must_redirect_to_login(&state, "/no-such-page"));
}

#[test]
fn pending_profile_hydration_does_not_redirect() {
    // A persisted token without a profile is the guard's job to
    // hydrate; bouncing to login here would race it.
    let state = SessionState { token: Some("tok".to_owned()), user: None };
    assert!(!must_redirect_to_login(&state, "/home"));
}

#[test]
fn an_authenticated_session_stays_put() {
    let state = SessionState {
        token: Some("tok".to_owned()),
        user: Some(user(Role::Employee)),
    };
    assert!(!must_redirect_to_login(&state, "/approvals"));
}
