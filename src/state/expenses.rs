//! Personal expense list: submission and detail fetch on top of the
//! generic list pattern.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::Api;
use crate::net::error::ApiError;
use crate::net::types::{CreateExpenseRequest, ExpenseDetail, ListView};
use crate::state::list::{self, ExpenseList};
use crate::state::session::{self, SessionState};

/// Context key for the personal expense list.
#[derive(Clone, Copy)]
pub struct PersonalExpenses(pub RwSignal<ExpenseList>);

/// Context key for the expense detail slot.
#[derive(Clone, Copy)]
pub struct ExpenseDetailSlot(pub RwSignal<ExpenseDetailState>);

/// Detail view state: cleared at the start of every fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDetailState {
    pub loading: bool,
    pub expense: Option<ExpenseDetail>,
    pub error: Option<ApiError>,
}

/// Fetch the personal list with current filters.
pub async fn fetch_expenses<A: Api>(
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
) {
    list::fetch(ListView::Personal, list, session, api).await;
}

/// Submit a new expense, then re-fetch the list unconditionally on
/// success (no optimistic insert). Failures re-raise for the form's
/// error banner; `create_pending` clears on both paths.
pub async fn create_expense<A: Api>(
    list: RwSignal<ExpenseList>,
    session: RwSignal<SessionState>,
    api: &A,
    req: &CreateExpenseRequest,
) -> Result<(), ApiError> {
    list.update(|l| l.create_pending = true);
    let result = api.create_expense(req).await;
    list.update(|l| l.create_pending = false);
    match result {
        Ok(()) => {
            fetch_expenses(list, session, api).await;
            Ok(())
        }
        Err(e) => {
            session::handle_api_error(session, &e);
            leptos::logging::warn!("failed to create expense: {e}");
            Err(e)
        }
    }
}

/// Fetch one expense into the detail slot. The slot is cleared first;
/// a failure is recorded there and re-raised.
pub async fn fetch_expense_by_id<A: Api>(
    detail: RwSignal<ExpenseDetailState>,
    session: RwSignal<SessionState>,
    api: &A,
    id: u64,
) -> Result<(), ApiError> {
    detail.update(|d| {
        d.loading = true;
        d.expense = None;
        d.error = None;
    });
    match api.fetch_expense(id).await {
        Ok(expense) => {
            detail.update(|d| {
                d.loading = false;
                d.expense = Some(expense);
            });
            Ok(())
        }
        Err(e) => {
            session::handle_api_error(session, &e);
            leptos::logging::warn!("failed to fetch expense {id}: {e}");
            detail.update(|d| {
                d.loading = false;
                d.error = Some(e.clone());
            });
            Err(e)
        }
    }
}
