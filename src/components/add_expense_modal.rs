//! Modal form for submitting a new expense.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::{AUTO_APPROVAL_THRESHOLD_IDR, CreateExpenseRequest};
use crate::state::expenses::{self, PersonalExpenses};
use crate::state::session::SessionState;
use crate::util::format::format_rupiah;

/// Add-expense dialog. Emits `on_success` then `on_close` after the
/// expense is created (the store re-fetches the list itself); a failed
/// submission shows a dismissable error banner and emits nothing.
#[component]
pub fn AddExpenseModal(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let personal = expect_context::<PersonalExpenses>();
    let api = expect_context::<HttpApi>();

    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let receipt_url = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = move || personal.0.with(|l| l.create_pending);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending() {
            return;
        }
        error.set(None);

        let Ok(amount_idr) = amount.get_untracked().trim().parse::<u64>() else {
            error.set(Some("Amount must be a whole number of rupiah.".to_owned()));
            return;
        };
        let description = description.get_untracked().trim().to_owned();
        if description.is_empty() {
            error.set(Some("Description is required.".to_owned()));
            return;
        }
        let receipt = receipt_url.get_untracked().trim().to_owned();
        let req = CreateExpenseRequest {
            amount_idr,
            description,
            receipt_url: if receipt.is_empty() { None } else { Some(receipt) },
        };

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match expenses::create_expense(personal.0, session, &api, &req).await {
                Ok(()) => {
                    on_success.run(());
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Expense"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="banner banner--error">
                        {move || error.get()}
                        <button class="banner__dismiss" on:click=move |_| error.set(None)>
                            "x"
                        </button>
                    </div>
                </Show>
                <form on:submit=submit>
                    <label class="dialog__label">
                        "Amount (IDR)"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <p class="dialog__hint">
                        {format!(
                            "Expenses below {} are approved automatically.",
                            format_rupiah(AUTO_APPROVAL_THRESHOLD_IDR),
                        )}
                    </p>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Receipt URL (optional)"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || receipt_url.get()
                            on:input=move |ev| receipt_url.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=pending>
                            {move || if pending() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
