//! Previous/next paging controls bounded by the backend's `totalPages`.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;
use wire::types::Pagination;

pub fn previous_page(page: &Pagination) -> Option<u32> {
    page.has_previous().then(|| page.current_page - 1)
}

pub fn next_page(page: &Pagination) -> Option<u32> {
    page.has_next().then(|| page.current_page + 1)
}

pub fn page_label(page: &Pagination) -> String {
    format!("Page {} of {} ({} total)", page.current_page.max(1), page.total_pages.max(1), page.total)
}

#[component]
pub fn Pager(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_page.run(page);
        }
    };

    view! {
        <div class="pager">
            <button
                class="btn"
                disabled=move || previous_page(&pagination.get()).is_none()
                on:click=move |_| go(previous_page(&pagination.get_untracked()))
            >
                "Previous"
            </button>
            <span class="pager__label">{move || page_label(&pagination.get())}</span>
            <button
                class="btn"
                disabled=move || next_page(&pagination.get()).is_none()
                on:click=move |_| go(next_page(&pagination.get_untracked()))
            >
                "Next"
            </button>
        </div>
    }
}
