//! Expense detail page, with the approval record and (for managers) the
//! decision modal.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::approval_action_modal::ApprovalActionModal;
use crate::components::layout::Layout;
use crate::components::status_badge::StatusBadge;
use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::net::types::{ApprovalDecision, ExpenseDetail, ExpenseStatus, Role};
use crate::state::expenses::{self, ExpenseDetailSlot};
use crate::state::session::SessionState;
use crate::util::format::{format_date, format_rupiah};

#[component]
pub fn ExpenseDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let detail = expect_context::<ExpenseDetailSlot>();
    let api = expect_context::<HttpApi>();
    let params = use_params_map();
    let reviewing = RwSignal::new(false);

    let expense_id = move || {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<u64>().ok()))
    };

    let load = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = expense_id() else {
                detail.0.update(|d| {
                    d.loading = false;
                    d.expense = None;
                    d.error = Some(ApiError::NotFound);
                });
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                // Error is recorded in the slot; the view renders it.
                let _ = expenses::fetch_expense_by_id(detail.0, session, &api, id).await;
            });
        })
    };
    // Re-load when the id segment changes in place.
    Effect::new(move || {
        params.track();
        load.run(());
    });

    let can_review = move || {
        session.with(|s| s.role()) == Some(Role::Manager)
            && detail.0.with(|d| {
                d.expense
                    .as_ref()
                    .is_some_and(|e| e.status == ExpenseStatus::AwaitingApproval)
            })
    };

    view! {
        <Layout>
            <div class="expense-detail-page">
                {move || {
                    let state = detail.0.get();
                    if state.loading {
                        return view! { <p class="list-status">"Loading expense..."</p> }
                            .into_any();
                    }
                    match (state.expense, state.error) {
                        (Some(expense), _) => view! { <DetailCard expense=expense/> }.into_any(),
                        (None, Some(ApiError::Forbidden)) => view! {
                            <p class="banner banner--error">
                                "You do not have access to this expense."
                            </p>
                        }
                        .into_any(),
                        (None, Some(ApiError::NotFound)) => view! {
                            <p class="banner banner--error">"Expense not found."</p>
                        }
                        .into_any(),
                        (None, Some(err)) => view! {
                            <p class="banner banner--error">
                                {format!("Failed to load expense: {}", err.user_message())}
                            </p>
                        }
                        .into_any(),
                        (None, None) => ().into_any(),
                    }
                }}

                <Show when=can_review>
                    <button class="btn btn--primary" on:click=move |_| reviewing.set(true)>
                        "Review"
                    </button>
                </Show>

                {move || {
                    reviewing
                        .get()
                        .then(|| expense_id())
                        .flatten()
                        .map(|id| {
                            view! {
                                <ApprovalActionModal
                                    expense_id=id
                                    on_close=Callback::new(move |()| reviewing.set(false))
                                    on_success=load
                                />
                            }
                        })
                }}
            </div>
        </Layout>
    }
}

#[component]
fn DetailCard(expense: ExpenseDetail) -> impl IntoView {
    let approval = expense.approval.clone();
    view! {
        <div class="detail-card">
            <header class="page-header">
                <h1>{expense.description.clone()}</h1>
                <StatusBadge status=expense.status/>
            </header>
            <dl class="detail-card__fields">
                <dt>"Amount"</dt>
                <dd>{format_rupiah(expense.amount_idr)}</dd>
                <dt>"Submitted by"</dt>
                <dd>{format!("{} ({})", expense.user.name, expense.user.email)}</dd>
                <dt>"Created"</dt>
                <dd>{format_date(&expense.created_at)}</dd>
                <dt>"Processed"</dt>
                <dd>
                    {expense
                        .processed_at
                        .as_deref()
                        .map_or_else(|| "-".to_owned(), format_date)}
                </dd>
                <dt>"Auto-approved"</dt>
                <dd>{if expense.auto_approved { "Yes" } else { "No" }}</dd>
                <dt>"Receipt"</dt>
                <dd>
                    {match expense.receipt_url.clone() {
                        Some(url) => view! {
                            <a href=url target="_blank" rel="noreferrer">"Open receipt"</a>
                        }
                        .into_any(),
                        None => view! { <span>"-"</span> }.into_any(),
                    }}
                </dd>
            </dl>

            {approval
                .map(|record| {
                    let decision = match record.decision {
                        ApprovalDecision::Approved => "Approved",
                        ApprovalDecision::Rejected => "Rejected",
                    };
                    view! {
                        <div class="detail-card__approval">
                            <h2>"Decision"</h2>
                            <p>
                                {format!(
                                    "{decision} by {} on {}",
                                    record.approver_name,
                                    format_date(&record.created_at),
                                )}
                            </p>
                            {record
                                .notes
                                .map(|notes| view! { <blockquote>{notes}</blockquote> })}
                        </div>
                    }
                })}
        </div>
    }
}
