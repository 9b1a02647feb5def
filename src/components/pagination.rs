//! Pagination Component
//!
//! Renders the page-control layout computed by the pager: prev/next arrows
//! plus numbered buttons with ellipsis truncation. The current page signal
//! is owned by the caller; this component only requests transitions.

use leptos::*;

use crate::pager::{step, ControlItem, Pager};

/// Page controls for a paginated table
#[component]
pub fn Pagination(
    /// Pager that computed the table's pages
    pager: Pager,
    /// Total page count for the record set being displayed
    total_pages: usize,
    /// Current page, owned by the parent
    current_page: ReadSignal<usize>,
    /// Setter for page transitions
    set_page: WriteSignal<usize>,
) -> impl IntoView {
    let window_radius = 1;

    view! {
        <div class="flex items-center justify-center space-x-1 py-4">
            // Previous arrow, disabled on the first page
            <button
                on:click=move |_| set_page.set(step(current_page.get(), -1, total_pages))
                disabled=move || current_page.get() == 1
                class="px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100 disabled:opacity-40 disabled:hover:bg-transparent"
            >
                "‹"
            </button>

            {move || {
                pager
                    .controls(total_pages, current_page.get(), window_radius)
                    .into_iter()
                    .map(|item| match item {
                        ControlItem::PageButton { page, active } => view! {
                            <button
                                on:click=move |_| set_page.set(page)
                                class=move || {
                                    let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                    if active {
                                        format!("{} bg-teal-700 text-white", base)
                                    } else {
                                        format!("{} text-gray-600 hover:bg-gray-100", base)
                                    }
                                }
                            >
                                {page}
                            </button>
                        }
                        .into_view(),
                        ControlItem::Ellipsis => view! {
                            <span class="px-2 text-gray-400">"…"</span>
                        }
                        .into_view(),
                    })
                    .collect_view()
            }}

            // Next arrow, disabled on the last page
            <button
                on:click=move |_| set_page.set(step(current_page.get(), 1, total_pages))
                disabled=move || current_page.get() == total_pages
                class="px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100 disabled:opacity-40 disabled:hover:bg-transparent"
            >
                "›"
            </button>
        </div>
    }
}
