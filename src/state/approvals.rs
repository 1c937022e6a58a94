//! Approval queue: the manager's view of expenses awaiting a decision,
//! plus the approve/reject actions.

#[cfg(test)]
#[path = "approvals_test.rs"]
mod approvals_test;

use leptos::prelude::RwSignal;

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::ListView;
use crate::state::list::{self, ExpenseList};
use crate::state::session::{self, SessionState};

/// Context key for the approval queue list.
#[derive(Clone, Copy)]
pub struct ApprovalQueue(pub RwSignal<ExpenseList>);

/// Fetch the approval queue with current pagination.
pub async fn fetch_queue<A: Api>(
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
) {
    list::fetch(ListView::ApprovalQueue, list, session, api).await;
}

/// Approve an expense. No automatic re-fetch: the caller refreshes the
/// list or detail view it came from after a success.
pub async fn approve<A: Api>(
    session: RwSignal<SessionState>,
    api: &A,
    id: u64,
    notes: Option<&str>,
) -> Result<(), ApiError> {
    api.approve_expense(id, notes).await.map_err(|e| {
        session::handle_api_error(session, &e);
        leptos::logging::warn!("failed to approve expense {id}: {e}");
        e
    })
}

/// Reject an expense. Same contract as [`approve`].
pub async fn reject<A: Api>(
    session: RwSignal<SessionState>,
    api: &A,
    id: u64,
    notes: Option<&str>,
) -> Result<(), ApiError> {
    api.reject_expense(id, notes).await.map_err(|e| {
        session::handle_api_error(session, &e);
        leptos::logging::warn!("failed to reject expense {id}: {e}");
        e
    })
}
