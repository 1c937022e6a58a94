//! Modal for a manager's approve/reject decision on one expense.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::ApprovalDecision;
use crate::state::approvals;
use crate::state::session::SessionState;

/// Decision dialog. Exactly one of approve/reject is submitted, per the
/// selected radio. Emits `on_success` then `on_close` when the call
/// lands; a failure shows an error banner and emits neither.
#[component]
pub fn ApprovalActionModal(
    expense_id: u64,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<HttpApi>();

    let decision = RwSignal::new(ApprovalDecision::Approved);
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        pending.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let trimmed = notes.get_untracked().trim().to_owned();
            let notes = if trimmed.is_empty() { None } else { Some(trimmed) };
            let result = match decision.get_untracked() {
                ApprovalDecision::Approved => {
                    approvals::approve(session, &api, expense_id, notes.as_deref()).await
                }
                ApprovalDecision::Rejected => {
                    approvals::reject(session, &api, expense_id, notes.as_deref()).await
                }
            };
            pending.set(false);
            match result {
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
                <h2>"Review Expense"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="banner banner--error">
                        {move || error.get()}
                        <button class="banner__dismiss" on:click=move |_| error.set(None)>
                            "x"
                        </button>
                    </div>
                </Show>
                <form on:submit=submit>
                    <label class="dialog__radio">
                        <input
                            type="radio"
                            id="approve"
                            name="decision"
                            checked=move || decision.get() == ApprovalDecision::Approved
                            on:change=move |_| decision.set(ApprovalDecision::Approved)
                        />
                        "Approve"
                    </label>
                    <label class="dialog__radio">
                        <input
                            type="radio"
                            id="reject"
                            name="decision"
                            checked=move || decision.get() == ApprovalDecision::Rejected
                            on:change=move |_| decision.set(ApprovalDecision::Rejected)
                        />
                        "Reject"
                    </label>
                    <label class="dialog__label">
                        "Notes (optional)"
                        <textarea
                            id="notes"
                            class="dialog__input"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                            {move || if pending.get() { "Saving..." } else { "Save decision" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
