//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::net::api::HttpApi;
use crate::pages::{
    approvals::ApprovalQueuePage, expense_detail::ExpenseDetailPage,
    expense_list::ExpenseListPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
};
use crate::router::Guarded;
use crate::router::routes::{self, RouteName};
use crate::state::approvals::ApprovalQueue;
use crate::state::expenses::{ExpenseDetailSlot, ExpenseDetailState, PersonalExpenses};
use crate::state::list::ExpenseList;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the session, the two list stores, the detail slot, and the
/// HTTP client as contexts, then sets up client-side routing with the
/// guard applied per route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let personal = PersonalExpenses(RwSignal::new(ExpenseList::default()));
    let queue = ApprovalQueue(RwSignal::new(ExpenseList::default()));
    let detail = ExpenseDetailSlot(RwSignal::new(ExpenseDetailState::default()));
    let api = HttpApi::default();

    provide_context(session);
    provide_context(personal);
    provide_context(queue);
    provide_context(detail);
    provide_context(api);

    view! {
        <Title text="Rincian"/>

        <Router>
            <UnauthorizedWatcher/>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/home"/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded name=RouteName::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("home")
                    view=|| view! { <Guarded name=RouteName::Home><HomePage/></Guarded> }
                />
                <Route
                    path=StaticSegment("expenses")
                    view=|| view! { <Guarded name=RouteName::Expenses><ExpenseListPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("expenses"), ParamSegment("id"))
                    view=|| view! {
                        <Guarded name=RouteName::ExpenseDetail><ExpenseDetailPage/></Guarded>
                    }
                />
                <Route
                    path=StaticSegment("approvals")
                    view=|| view! {
                        <Guarded name=RouteName::Approvals><ApprovalQueuePage/></Guarded>
                    }
                />
            </Routes>
        </Router>
    }
}

/// A forced logout is a missing token on an auth-required route. A
/// token without a profile is not one: the route guard is still
/// hydrating the profile and owns that wait.
fn must_redirect_to_login(state: &SessionState, path: &str) -> bool {
    state.token.is_none() && routes::match_path(path).requires_auth
}

/// Top-level owner of the forced-logout redirect: when the token goes
/// away while on an auth-required route (any 401 lands here via the
/// session funnel), navigate to login. The token is cleared once, so
/// the redirect fires once.
#[component]
fn UnauthorizedWatcher() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get_untracked();
        if session.with(|s| must_redirect_to_login(s, &path)) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
