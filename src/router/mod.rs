//! Routing support: the route table, the navigation guard, and the
//! `Guarded` wrapper that applies the guard to a routed page.

pub mod guard;
pub mod routes;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::router::guard::GuardOutcome;
use crate::router::routes::RouteName;
use crate::state::session::SessionState;

/// Wraps a routed page: evaluates the guard on mount, renders children
/// only on `Proceed`, navigates away otherwise. Rendering suspends
/// (nothing shows) until the decision lands, which covers the
/// profile-hydration wait.
#[component]
pub fn Guarded(name: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    let decision = RwSignal::new(None::<GuardOutcome>);

    leptos::task::spawn_local(async move {
        let outcome = guard::evaluate(routes::meta(name), session, &api).await;
        decision.set(Some(outcome));
    });

    Effect::new(move || match decision.get() {
        Some(GuardOutcome::RedirectLogin) => navigate("/login", NavigateOptions::default()),
        Some(GuardOutcome::RedirectHome) => navigate("/home", NavigateOptions::default()),
        Some(GuardOutcome::Proceed) | None => {}
    });

    view! {
        <Show when=move || decision.get() == Some(GuardOutcome::Proceed)>
            {children()}
        </Show>
    }
}
