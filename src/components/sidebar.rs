//! Sidebar Component
//!
//! Left navigation sidebar with route links and the logout action.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <aside class="w-56 bg-teal-900 text-white flex flex-col justify-between min-h-screen">
            <nav class="flex flex-col pt-6">
                <SidebarLink href="/" icon="🏠" label="Overview" />
                <SidebarLink href="/crowd-entries" icon="👥" label="Crowd Entries" />
            </nav>

            // Logout at the bottom
            <button
                on:click=move |_| state.logout()
                title="Logout from application"
                class="flex items-center space-x-3 px-6 py-4 text-teal-100 hover:bg-teal-800 transition-colors"
            >
                <span>"⎋"</span>
                <span>"Logout"</span>
            </button>
        </aside>
    }
}

/// Individual sidebar link with active-route highlighting
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center space-x-3 px-6 py-3 text-teal-100 hover:bg-teal-800 transition-colors"
            active_class="bg-teal-700 text-white border-l-4 border-white"
        >
            <span>{icon}</span>
            <span>{label}</span>
        </A>
    }
}
