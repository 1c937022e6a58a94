use futures::executor::block_on;
use leptos::prelude::{GetUntracked, RwSignal};

use super::*;
use crate::net::error::ApiError;
use crate::net::test_api::{MockApi, user};
use crate::net::types::Role;
use crate::router::routes::meta;

fn empty_session() -> RwSignal<SessionState> {
    RwSignal::new(SessionState::default())
}

fn session_for(role: Role) -> RwSignal<SessionState> {
    RwSignal::new(SessionState {
        token: Some("tok".to_owned()),
        user: Some(user(role)),
    })
}

// =============================================================
// Auth requirement
// =============================================================

#[test]
fn unauthenticated_visit_to_protected_route_redirects_to_login() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(meta(RouteName::Expenses), empty_session(), &api));
    assert_eq!(outcome, GuardOutcome::RedirectLogin);
}

#[test]
fn unauthenticated_visit_to_login_proceeds() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(meta(RouteName::Login), empty_session(), &api));
    assert_eq!(outcome, GuardOutcome::Proceed);
}

#[test]
fn authenticated_visit_to_protected_route_proceeds() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(
        meta(RouteName::Expenses),
        session_for(Role::Employee),
        &api,
    ));
    assert_eq!(outcome, GuardOutcome::Proceed);
}

// =============================================================
// Role allow-list
// =============================================================

#[test]
fn employee_visiting_approvals_is_sent_home() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(
        meta(RouteName::Approvals),
        session_for(Role::Employee),
        &api,
    ));
    assert_eq!(outcome, GuardOutcome::RedirectHome);
}

#[test]
fn manager_visiting_approvals_proceeds() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(
        meta(RouteName::Approvals),
        session_for(Role::Manager),
        &api,
    ));
    assert_eq!(outcome, GuardOutcome::Proceed);
}

// =============================================================
// Login while authenticated
// =============================================================

#[test]
fn authenticated_visit_to_login_is_sent_home() {
    let api = MockApi::new();
    let outcome = block_on(evaluate(
        meta(RouteName::Login),
        session_for(Role::Employee),
        &api,
    ));
    assert_eq!(outcome, GuardOutcome::RedirectHome);
}

// =============================================================
// Profile hydration
// =============================================================

#[test]
fn persisted_token_hydrates_the_profile_before_deciding() {
    let session = RwSignal::new(SessionState { token: Some("tok".to_owned()), user: None });
    let api = MockApi::new();
    api.me_results.borrow_mut().push(Ok(user(Role::Manager)));

    let outcome = block_on(evaluate(meta(RouteName::Approvals), session, &api));

    assert_eq!(outcome, GuardOutcome::Proceed);
    assert_eq!(api.calls(), vec!["me"]);
    assert!(session.get_untracked().is_authenticated());
}

#[test]
fn hydration_failure_redirects_to_login_and_clears_the_session() {
    let session = RwSignal::new(SessionState { token: Some("tok".to_owned()), user: None });
    let api = MockApi::new();
    api.me_results.borrow_mut().push(Err(ApiError::Unauthorized));

    let outcome = block_on(evaluate(meta(RouteName::Home), session, &api));

    assert_eq!(outcome, GuardOutcome::RedirectLogin);
    assert_eq!(session.get_untracked(), SessionState::default());
}

#[test]
fn hydration_failure_redirects_to_login_even_for_public_routes() {
    let session = RwSignal::new(SessionState { token: Some("tok".to_owned()), user: None });
    let api = MockApi::new();
    api.me_results
        .borrow_mut()
        .push(Err(ApiError::Network("offline".to_owned())));

    let outcome = block_on(evaluate(meta(RouteName::Login), session, &api));

    assert_eq!(outcome, GuardOutcome::RedirectLogin);
}

#[test]
fn fully_hydrated_session_skips_the_profile_fetch() {
    let api = MockApi::new();
    block_on(evaluate(meta(RouteName::Home), session_for(Role::Employee), &api));
    assert!(api.calls().is_empty());
}
