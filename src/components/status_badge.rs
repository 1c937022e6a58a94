//! Colored status badge for expense rows and detail views.

use leptos::prelude::*;

use crate::net::types::ExpenseStatus;

/// CSS hook classes per status.
pub fn status_class(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::AwaitingApproval => "badge badge--yellow",
        ExpenseStatus::Approved => "badge badge--green",
        ExpenseStatus::Rejected => "badge badge--red",
        ExpenseStatus::Completed => "badge badge--slate",
    }
}

/// Human label per status.
pub fn status_text(status: ExpenseStatus) -> &'static str {
    match status {
        ExpenseStatus::AwaitingApproval => "Awaiting approval",
        ExpenseStatus::Approved => "Approved",
        ExpenseStatus::Rejected => "Rejected",
        ExpenseStatus::Completed => "Completed",
    }
}

#[component]
pub fn StatusBadge(status: ExpenseStatus) -> impl IntoView {
    view! { <span class=status_class(status)>{status_text(status)}</span> }
}
