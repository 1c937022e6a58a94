//! Login page with email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::state::session::{self, SessionState};

/// Login page. A successful login (token + profile) navigates home;
/// failures show a dismissable banner and leave the session logged out.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session::login(
                session,
                &api,
                email.get_untracked().trim(),
                &password.get_untracked(),
            )
            .await;
            pending.set(false);
            match result {
                Ok(()) => navigate("/home", NavigateOptions::default()),
                Err(ApiError::Unauthorized) => {
                    error.set(Some("Invalid email or password.".to_owned()));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Rincian"</h1>
            <p>"Expense reimbursement"</p>
            <Show when=move || error.get().is_some()>
                <div class="banner banner--error">
                    {move || error.get()}
                    <button class="banner__dismiss" on:click=move |_| error.set(None)>
                        "x"
                    </button>
                </div>
            </Show>
            <form class="login-page__form" on:submit=submit>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
