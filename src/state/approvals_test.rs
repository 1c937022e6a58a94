use futures::executor::block_on;
use leptos::prelude::{GetUntracked, RwSignal};

use super::*;
use crate::net::error::ApiError;
use crate::net::test_api::{MockApi, page, user};
use crate::net::types::Role;
use crate::state::session::SessionState;

fn manager_session() -> RwSignal<SessionState> {
    RwSignal::new(SessionState {
        token: Some("tok".to_owned()),
        user: Some(user(Role::Manager)),
    })
}

// =============================================================
// Decisions
// =============================================================

#[test]
fn approve_hits_only_the_approve_endpoint() {
    let session = manager_session();
    let api = MockApi::new();
    api.approve_results.borrow_mut().push(Ok(()));

    block_on(approve(session, &api, 42, Some("Looks good"))).expect("approve");

    assert_eq!(api.calls(), vec![r#"approve id=42 notes=Some("Looks good")"#]);
    assert_eq!(api.count_calls("reject"), 0);
}

#[test]
fn reject_hits_only_the_reject_endpoint() {
    let session = manager_session();
    let api = MockApi::new();
    api.reject_results.borrow_mut().push(Ok(()));

    block_on(reject(session, &api, 42, Some("Invalid reason"))).expect("reject");

    assert_eq!(api.calls(), vec![r#"reject id=42 notes=Some("Invalid reason")"#]);
    assert_eq!(api.count_calls("approve"), 0);
}

#[test]
fn decision_without_notes_sends_none() {
    let session = manager_session();
    let api = MockApi::new();
    api.approve_results.borrow_mut().push(Ok(()));

    block_on(approve(session, &api, 7, None)).expect("approve");

    assert_eq!(api.calls(), vec!["approve id=7 notes=None"]);
}

#[test]
fn failed_decision_reraises() {
    let session = manager_session();
    let api = MockApi::new();
    api.reject_results
        .borrow_mut()
        .push(Err(ApiError::Api { status: 409, message: "already processed".to_owned() }));

    let err = block_on(reject(session, &api, 42, None)).unwrap_err();

    assert_eq!(err, ApiError::Api { status: 409, message: "already processed".to_owned() });
}

#[test]
fn unauthorized_decision_clears_the_session() {
    let session = manager_session();
    let api = MockApi::new();
    api.approve_results.borrow_mut().push(Err(ApiError::Unauthorized));

    let err = block_on(approve(session, &api, 42, None)).unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert!(!session.get_untracked().is_authenticated());
}

// =============================================================
// Queue fetch
// =============================================================

#[test]
fn queue_fetch_uses_the_approval_queue_view() {
    let session = manager_session();
    let list = RwSignal::new(crate::state::list::ExpenseList::default());
    let api = MockApi::new();
    api.list_results.borrow_mut().push(Ok(page(&[1, 2], 2)));

    block_on(fetch_queue(list, session, &api));

    assert_eq!(api.calls(), vec!["list view=approval_queue&limit=5&offset=0"]);
    assert_eq!(list.get_untracked().items.len(), 2);
}
