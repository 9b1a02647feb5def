//! Toast Component
//!
//! Transient status banners: sign-in confirmations and validation failures.
//! Messages expire on the global-state timers; the close button dismisses
//! early.

use leptos::*;

use crate::state::global::GlobalState;

/// Status banner stack, rendered top-center above both the login page and
/// the dashboard shell
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 inset-x-0 z-50 flex flex-col items-center space-y-2 pointer-events-none">
            {move || {
                let mut banners = Vec::new();
                if let Some(message) = state.success.get() {
                    banners.push((message, false));
                }
                if let Some(message) = state.error.get() {
                    banners.push((message, true));
                }

                banners
                    .into_iter()
                    .map(|(message, is_error)| {
                        let (icon, tone) = if is_error {
                            ("✕", "bg-red-600")
                        } else {
                            ("✓", "bg-teal-700")
                        };

                        let dismiss = move |_| {
                            if is_error {
                                state.clear_error();
                            } else {
                                state.clear_success();
                            }
                        };

                        view! {
                            <div class=format!(
                                "pointer-events-auto flex items-center space-x-3 {} text-white \
                                 px-4 py-3 rounded-lg shadow-lg",
                                tone
                            )>
                                <span class="text-lg">{icon}</span>
                                <span class="text-sm font-medium">{message}</span>
                                <button
                                    on:click=dismiss
                                    aria-label="Dismiss notification"
                                    class="pl-2 text-white/70 hover:text-white"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
