//! Approval queue page (manager only, enforced by the route guard).

use leptos::prelude::*;

use crate::components::approval_action_modal::ApprovalActionModal;
use crate::components::layout::Layout;
use crate::components::pagination::Pagination;
use crate::net::api::HttpApi;
use crate::net::types::ListView;
use crate::pages::expense_list::ListBody;
use crate::state::approvals::ApprovalQueue;
use crate::state::list::{self, ExpenseList};
use crate::state::session::SessionState;

#[component]
pub fn ApprovalQueuePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let queue = expect_context::<ApprovalQueue>();
    let api = expect_context::<HttpApi>();

    // Which expense is being reviewed, if any.
    let reviewing = RwSignal::new(None::<u64>);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            list::fetch(ListView::ApprovalQueue, queue.0, session, &api).await;
        });
    }

    let refresh = {
        let api = api.clone();
        Callback::new(move |()| {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                list::fetch(ListView::ApprovalQueue, queue.0, session, &api).await;
            });
        })
    };

    let on_page = Callback::new(move |page: u32| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            list::set_page(ListView::ApprovalQueue, queue.0, session, &api, page).await;
        });
    });

    view! {
        <Layout>
            <div class="approvals-page">
                <header class="page-header">
                    <h1>"Approval Queue"</h1>
                </header>

                <ListBody list=queue.0 retry=refresh show_owner=true/>

                <div class="approvals-page__actions">
                    {move || {
                        queue
                            .0
                            .with(|l| l.items.clone())
                            .into_iter()
                            .map(|expense| {
                                let id = expense.id;
                                view! {
                                    <button
                                        class="btn"
                                        on:click=move |_| reviewing.set(Some(id))
                                    >
                                        {format!("Review #{id}: {}", expense.description)}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Pagination
                    page=Signal::derive(move || queue.0.with(ExpenseList::current_page))
                    total_pages=Signal::derive(move || queue.0.with(ExpenseList::total_pages))
                    on_select=on_page
                />

                {move || {
                    reviewing
                        .get()
                        .map(|id| {
                            view! {
                                <ApprovalActionModal
                                    expense_id=id
                                    on_close=Callback::new(move |()| reviewing.set(None))
                                    on_success=refresh
                                />
                            }
                        })
                }}
            </div>
        </Layout>
    }
}
