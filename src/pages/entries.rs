//! Crowd Entries Page
//!
//! Paginated table of visit records. The page owns the current-page signal
//! and only ever stores values handed back by the pager, so the displayed
//! page index is valid by construction.

use leptos::*;

use crate::components::Pagination;
use crate::data::{self, CrowdEntry};
use crate::pager::Pager;
use crate::state::global::GlobalState;

/// Crowd entries page component
#[component]
pub fn CrowdEntries() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // ENTRIES_PER_PAGE is a nonzero constant, so construction cannot fail
    let pager = Pager::new(data::ENTRIES_PER_PAGE).expect("page size constant is nonzero");
    let entries = data::crowd_entries();
    let total_pages = pager.total_pages(entries.len());

    let (current_page, set_page) = create_signal(1usize);

    view! {
        <div class="space-y-6">
            // Page header with date display
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-800">"Crowd Entries"</h1>
                <div class="flex items-center space-x-2 text-gray-600 bg-white border border-gray-200 rounded-lg px-4 py-2">
                    <span>"📅"</span>
                    <span>{move || state.selected_date.get()}</span>
                </div>
            </div>

            <div class="bg-white rounded-xl border border-gray-200 overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-gray-500 text-sm">
                        <tr>
                            <th class="px-6 py-3 font-medium">"Name"</th>
                            <th class="px-6 py-3 font-medium">"Sex"</th>
                            <th class="px-6 py-3 font-medium">"Entry"</th>
                            <th class="px-6 py-3 font-medium">"Exit"</th>
                            <th class="px-6 py-3 font-medium">"Dwell Time"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let page = pager.page_of(&entries, current_page.get() as i64);
                            page.records
                                .iter()
                                .cloned()
                                .map(|entry| view! { <EntryRow entry=entry /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>

                <Pagination
                    pager=pager
                    total_pages=total_pages
                    current_page=current_page
                    set_page=set_page
                />
            </div>
        </div>
    }
}

/// Single table row for a visit record
#[component]
fn EntryRow(entry: CrowdEntry) -> impl IntoView {
    view! {
        <tr class="border-t border-gray-100 hover:bg-gray-50">
            <td class="px-6 py-3">
                <div class="flex items-center space-x-3">
                    <span class="text-xl">{entry.avatar}</span>
                    <span class="text-gray-800">{entry.name}</span>
                </div>
            </td>
            <td class="px-6 py-3 text-gray-600">{entry.sex.label()}</td>
            <td class="px-6 py-3 text-gray-600">{entry.entry}</td>
            <td class="px-6 py-3 text-gray-600">{entry.exit}</td>
            <td class="px-6 py-3 text-gray-600">{entry.dwell_time}</td>
        </tr>
    }
}
