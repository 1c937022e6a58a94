//! Landing page after login.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::net::types::Role;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let name = move || {
        session.with(|s| s.user.as_ref().map_or_else(String::new, |u| u.name.clone()))
    };
    let is_manager = move || session.with(|s| s.role()) == Some(Role::Manager);

    view! {
        <Layout>
            <div class="home-page">
                <h1>{move || format!("Welcome, {}", name())}</h1>
                <div class="home-page__cards">
                    <A href="/expenses" attr:class="card">
                        <h2>"My Expenses"</h2>
                        <p>"Submit and track your reimbursements."</p>
                    </A>
                    <Show when=is_manager>
                        <A href="/approvals" attr:class="card">
                            <h2>"Approval Queue"</h2>
                            <p>"Review expenses awaiting your decision."</p>
                        </A>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}
