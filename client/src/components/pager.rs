//! Previous / numbered / next page controls under the project grid.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

use crate::state::pagination::Pagination;

/// Screen-reader summary, e.g. `Page 2 of 3`.
pub fn page_status(pagination: &Pagination) -> String {
    format!("Page {} of {}", pagination.current(), pagination.total_pages())
}

pub fn page_button_label(page: usize) -> String {
    format!("Go to page {page}")
}

/// Renders nothing when everything fits on one page.
#[component]
pub fn Pager(#[prop(into)] pagination: Signal<Pagination>, on_change: Callback<usize>) -> impl IntoView {
    view! {
        <Show when=move || pagination.get().shows_pager()>
            <nav class="pager" aria-label="Project pages">
                <button
                    class="pager__step"
                    disabled=move || !pagination.get().has_previous()
                    on:click=move |_| on_change.run(pagination.get_untracked().current().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                <ol class="pager__pages">
                    {move || {
                        let current = pagination.get();
                        current
                            .pages()
                            .map(|page| {
                                let active = page == current.current();
                                view! {
                                    <li>
                                        <button
                                            class="pager__page"
                                            class:pager__page--active=active
                                            aria-current=if active { Some("page") } else { None }
                                            aria-label=page_button_label(page)
                                            on:click=move |_| on_change.run(page)
                                        >
                                            {page}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
                <button
                    class="pager__step"
                    disabled=move || !pagination.get().has_next()
                    on:click=move |_| on_change.run(pagination.get_untracked().current() + 1)
                >
                    "Next ›"
                </button>
                <span class="pager__status visually-hidden" aria-live="polite">
                    {move || page_status(&pagination.get())}
                </span>
            </nav>
        </Show>
    }
}
