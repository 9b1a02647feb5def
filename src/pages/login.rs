//! Login Page
//!
//! Email/password form with live validation and a password visibility
//! toggle. Authentication is mock: any non-empty credentials with a
//! well-formed email are accepted.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (email_error, set_email_error) = create_signal(None::<&'static str>);

    // Validate the email as the user types, but only once the field is
    // non-empty so an untouched form shows no error
    let on_email_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if !value.is_empty() && !session::is_valid_email(&value) {
            set_email_error.set(Some("Please enter a valid email address"));
        } else {
            set_email_error.set(None);
        }
        set_email.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        if !session::is_valid_email(&e) {
            set_email_error.set(Some("Please enter a valid email address"));
            return;
        }

        state.login(&e, &password.get());
    };

    view! {
        <div class="min-h-screen bg-teal-900 flex items-center justify-center px-4">
            <div class="flex flex-col lg:flex-row items-center gap-12 max-w-4xl w-full">
                // Welcome message on the left
                <div class="text-white flex-1">
                    <h1 class="text-4xl font-bold leading-tight">"Welcome to the"</h1>
                    <h1 class="text-4xl font-bold leading-tight">"Crowd Management System"</h1>
                </div>

                // Login card on the right
                <div class="bg-white rounded-2xl shadow-xl p-8 w-full max-w-sm">
                    <div class="flex items-center space-x-2 mb-8">
                        <span class="text-3xl">"📡"</span>
                        <span class="text-xl font-semibold text-teal-900">"crowdscope"</span>
                    </div>

                    <form on:submit=on_submit class="space-y-5">
                        // Email input with validation
                        <div>
                            <label for="email" class="block text-sm text-gray-600 mb-2">
                                "Email " <span class="text-red-500">"*"</span>
                            </label>
                            <input
                                type="email"
                                id="email"
                                placeholder="example@email.com"
                                prop:value=move || email.get()
                                on:input=on_email_input
                                class=move || {
                                    let base = "w-full rounded-lg px-4 py-3 border focus:outline-none";
                                    if email_error.get().is_some() {
                                        format!("{} border-red-400 focus:border-red-500", base)
                                    } else {
                                        format!("{} border-gray-300 focus:border-teal-600", base)
                                    }
                                }
                            />
                            {move || email_error.get().map(|msg| view! {
                                <span class="text-red-500 text-xs mt-1 block">{msg}</span>
                            })}
                        </div>

                        // Password input with visibility toggle
                        <div>
                            <label for="password" class="block text-sm text-gray-600 mb-2">
                                "Password " <span class="text-red-500">"*"</span>
                            </label>
                            <div class="relative">
                                <input
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    id="password"
                                    placeholder="••••••••••"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    class="w-full rounded-lg px-4 py-3 border border-gray-300
                                           focus:border-teal-600 focus:outline-none pr-12"
                                />
                                <button
                                    type="button"
                                    aria-label="Toggle password visibility"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                    class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                                >
                                    {move || if show_password.get() { "🙈" } else { "👁" }}
                                </button>
                            </div>
                        </div>

                        // Submit button
                        <button
                            type="submit"
                            class="w-full py-3 bg-teal-700 hover:bg-teal-800 text-white rounded-lg
                                   font-medium transition-colors"
                        >
                            "Login"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
