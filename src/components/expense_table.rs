//! Expense rows shared by the personal list and the approval queue.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status_badge::StatusBadge;
use crate::net::types::Expense;
use crate::util::format::{format_date, format_rupiah};

/// Table of expense rows linking to the detail page. `show_owner`
/// adds the submitting user's column (approval queue).
#[component]
pub fn ExpenseTable(items: Vec<Expense>, #[prop(optional)] show_owner: bool) -> impl IntoView {
    view! {
        <table class="expense-table">
            <thead>
                <tr>
                    <th>"Description"</th>
                    <th>"Amount"</th>
                    <Show when=move || show_owner>
                        <th>"Submitted by"</th>
                    </Show>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|expense| {
                        let detail_href = format!("/expenses/{}", expense.id);
                        let amount = format_rupiah(expense.amount_idr);
                        let created = format_date(&expense.created_at);
                        let owner = expense.user.name;
                        let auto_approved = expense.auto_approved;
                        view! {
                            <tr>
                                <td>{expense.description}</td>
                                <td>{amount}</td>
                                <Show when=move || show_owner>
                                    <td>{owner.clone()}</td>
                                </Show>
                                <td>
                                    <StatusBadge status=expense.status/>
                                    <Show when=move || auto_approved>
                                        <span class="badge badge--muted">"auto"</span>
                                    </Show>
                                </td>
                                <td>{created}</td>
                                <td>
                                    <A href=detail_href>"View"</A>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
