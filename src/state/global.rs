//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::session::Session;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Current session (login gate for the whole app)
    pub session: RwSignal<Session>,
    /// Label for the dashboard date selector
    pub selected_date: RwSignal<String>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    /// Fresh state: unauthenticated, no pending messages
    pub fn new() -> Self {
        GlobalState {
            session: create_rw_signal(Session::Unauthenticated),
            selected_date: create_rw_signal("Today".to_string()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Sign in with mock credentials. Success clears any stale validation
    /// error and confirms through the success toast; failure reports through
    /// the error toast rather than panicking.
    pub fn login(&self, email: &str, password: &str) -> bool {
        match Session::login(email, password) {
            Some(session) => {
                let email = email.trim();
                web_sys::console::log_1(&format!("user logged in: {}", email).into());
                self.session.set(session);
                self.clear_error();
                self.show_success(&format!("Signed in as {}", email));
                true
            }
            None => {
                self.show_error("Enter a valid email and password");
                false
            }
        }
    }

    /// Clear the session and return to the login page
    pub fn logout(&self) {
        web_sys::console::log_1(&"user logged out".into());
        self.session.set(Session::Unauthenticated);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Clear success message
    pub fn clear_success(&self) {
        self.success.set(None);
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
