//! App Root Component
//!
//! Session gate, routing, and the dashboard shell (navbar + sidebar +
//! routed content).

use leptos::*;
use leptos_router::*;

use crate::components::{Navbar, Sidebar, Toast};
use crate::pages::{CrowdEntries, Login, Overview};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        // Session gate: the dashboard shell only exists while authenticated
        {move || {
            if state.session.get().is_authenticated() {
                view! { <Shell /> }.into_view()
            } else {
                view! { <Login /> }.into_view()
            }
        }}

        // Toast notifications (visible on both sides of the gate)
        <Toast />
    }
}

/// Authenticated dashboard shell with routing
#[component]
fn Shell() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 flex flex-col">
                <Navbar />

                <div class="flex flex-1">
                    <Sidebar />

                    // Main content area
                    <main class="flex-1 px-8 py-8">
                        <Routes>
                            <Route path="/" view=Overview />
                            <Route path="/crowd-entries" view=CrowdEntries />
                            // Unknown routes land back on the overview
                            <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
