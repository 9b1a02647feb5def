//! Navbar Component
//!
//! Top navigation bar with the brand title, user avatars, and a
//! notification badge.

use leptos::*;

/// Top navigation bar component
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 px-6 h-16 flex items-center justify-between">
            // Brand title
            <div class="text-lg font-semibold text-gray-800">"Crowd Management System"</div>

            <div class="flex items-center space-x-4">
                // User avatars with notification indicator
                <div class="relative flex items-center -space-x-2">
                    <span class="text-2xl" title="User 1">"👤"</span>
                    <span class="text-2xl" title="User 2">"👤"</span>
                    <span
                        class="absolute -top-1 -right-2 bg-red-500 text-white text-xs rounded-full w-4 h-4 flex items-center justify-center"
                        title="2 notifications"
                    >
                        "2"
                    </span>
                </div>

                // Static auth shortcuts carried over from the mock design;
                // no handlers behind them
                <button class="px-4 py-2 text-sm text-teal-800 border border-teal-700 rounded-lg hover:bg-teal-50 transition-colors">
                    "Log in or create account"
                </button>
                <button class="flex items-center space-x-2 px-4 py-2 text-sm text-gray-700 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors">
                    <span class="font-semibold text-blue-500">"G"</span>
                    <span>"Continue with Google"</span>
                </button>
            </div>
        </nav>
    }
}
