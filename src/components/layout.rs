//! Default page chrome: navbar with role-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::net::types::Role;
use crate::state::session::{self, SessionState};

/// Navbar plus page content. Pages with the default layout wrap their
/// body in this component; login/not-found render bare.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    let logout_error = RwSignal::new(None::<String>);

    let is_manager = move || session.with(|s| s.role()) == Some(Role::Manager);

    let on_logout = move |_| {
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::logout(session, &api).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => logout_error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="layout">
            <nav class="navbar">
                <A href="/home" attr:class="navbar__brand">"Rincian"</A>
                <div class="navbar__links">
                    <A href="/expenses">"My Expenses"</A>
                    <Show when=is_manager>
                        <A href="/approvals">"Approvals"</A>
                    </Show>
                </div>
                <div class="navbar__session">
                    <span class="navbar__user">
                        {move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()))}
                    </span>
                    <button class="btn" on:click=on_logout>"Log out"</button>
                </div>
            </nav>
            <Show when=move || logout_error.get().is_some()>
                <div class="banner banner--error">
                    {move || logout_error.get()}
                    <button class="banner__dismiss" on:click=move |_| logout_error.set(None)>
                        "x"
                    </button>
                </div>
            </Show>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
