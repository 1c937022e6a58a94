//! Personal expense list: filters, pagination, and submission.

use leptos::prelude::*;

use crate::components::add_expense_modal::AddExpenseModal;
use crate::components::expense_table::ExpenseTable;
use crate::components::layout::Layout;
use crate::components::pagination::Pagination;
use crate::net::api::HttpApi;
use crate::net::types::{ExpenseStatus, FilterUpdate, ListView};
use crate::state::expenses::PersonalExpenses;
use crate::state::list::{self, ExpenseList, LoadState};
use crate::state::session::SessionState;

const STATUS_OPTIONS: [(&str, Option<ExpenseStatus>); 5] = [
    ("all", None),
    ("awaiting_approval", Some(ExpenseStatus::AwaitingApproval)),
    ("approved", Some(ExpenseStatus::Approved)),
    ("rejected", Some(ExpenseStatus::Rejected)),
    ("completed", Some(ExpenseStatus::Completed)),
];

#[component]
pub fn ExpenseListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let personal = expect_context::<PersonalExpenses>();
    let api = expect_context::<HttpApi>();
    let show_add = RwSignal::new(false);

    // Initial load.
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            list::fetch(ListView::Personal, personal.0, session, &api).await;
        });
    }

    let apply_filters = {
        let api = api.clone();
        move |update: FilterUpdate| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                list::set_filters(ListView::Personal, personal.0, session, &api, update).await;
            });
        }
    };

    let on_status_change = {
        let apply_filters = apply_filters.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let status = STATUS_OPTIONS
                .iter()
                .find(|(key, _)| *key == value)
                .and_then(|(_, status)| *status);
            apply_filters(FilterUpdate { status, auto_approved: false });
        }
    };

    let on_auto_toggle = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        apply_filters(FilterUpdate { status: None, auto_approved: checked });
    };

    let on_page = {
        let api = api.clone();
        Callback::new(move |page: u32| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                list::set_page(ListView::Personal, personal.0, session, &api, page).await;
            });
        })
    };

    let retry = Callback::new(move |()| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            list::fetch(ListView::Personal, personal.0, session, &api).await;
        });
    });

    let status_value = move || {
        personal.0.with(|l| l.filters.status).map_or("all", ExpenseStatus::as_str)
    };

    view! {
        <Layout>
            <div class="expense-list-page">
                <header class="page-header">
                    <h1>"My Expenses"</h1>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ New Expense"
                    </button>
                </header>

                <div class="filters">
                    <label>
                        "Status "
                        <select prop:value=status_value on:change=on_status_change>
                            {STATUS_OPTIONS
                                .iter()
                                .map(|(key, _)| view! { <option value=*key>{*key}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || personal.0.with(|l| l.filters.auto_approved)
                            on:change=on_auto_toggle
                        />
                        "Auto-approved only"
                    </label>
                </div>

                <ListBody list=personal.0 retry=retry show_owner=false/>

                <Pagination
                    page=Signal::derive(move || personal.0.with(ExpenseList::current_page))
                    total_pages=Signal::derive(move || personal.0.with(ExpenseList::total_pages))
                    on_select=on_page
                />

                <Show when=move || show_add.get()>
                    <AddExpenseModal
                        on_close=Callback::new(move |()| show_add.set(false))
                        on_success=Callback::new(move |()| {})
                    />
                </Show>
            </div>
        </Layout>
    }
}

/// Loading / failed / empty / table body shared with the approval queue.
#[component]
pub fn ListBody(
    list: RwSignal<ExpenseList>,
    retry: Callback<()>,
    show_owner: bool,
) -> impl IntoView {
    move || {
        let state = list.get();
        match state.load {
            LoadState::Idle | LoadState::Loading => {
                view! { <p class="list-status">"Loading expenses..."</p> }.into_any()
            }
            LoadState::Failed(message) => view! {
                <div class="banner banner--error">
                    <p>{format!("Failed to load expenses: {message}")}</p>
                    <button class="btn" on:click=move |_| retry.run(())>"Retry"</button>
                </div>
            }
            .into_any(),
            LoadState::Loaded if state.items.is_empty() => {
                view! { <p class="list-status">"No expenses found."</p> }.into_any()
            }
            LoadState::Loaded => {
                view! { <ExpenseTable items=state.items show_owner=show_owner/> }.into_any()
            }
        }
    }
}
