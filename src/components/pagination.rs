//! Previous/next pagination control.

use leptos::prelude::*;

/// Pagination footer. `page` is 1-indexed; `on_select` receives the
/// requested page. Bounds are clamped here, but a stale `total_pages`
/// is harmless: the server answers out-of-range offsets with an empty
/// page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn"
                disabled=move || page.get() <= 1
                on:click=move |_| on_select.run(page.get().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || format!("Page {} of {}", page.get(), total_pages.get())}
            </span>
            <button
                class="btn"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_select.run((page.get() + 1).min(total_pages.get()))
            >
                "Next"
            </button>
        </div>
    }
}
