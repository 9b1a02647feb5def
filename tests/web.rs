//! Browser smoke tests for the reactive state layer.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`). These
//! cover the signal plumbing that the pure unit tests cannot: session
//! transitions and the toast messages they raise.

#![cfg(target_arch = "wasm32")]

use leptos::*;
use wasm_bindgen_test::*;

use crowdscope::state::global::GlobalState;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn login_sets_session_and_success_toast() {
    let runtime = create_runtime();
    let state = GlobalState::new();

    assert!(state.login("user@example.com", "hunter2"));
    assert!(state.session.get_untracked().is_authenticated());
    assert_eq!(
        state.success.get_untracked().as_deref(),
        Some("Signed in as user@example.com")
    );
    assert!(state.error.get_untracked().is_none());

    state.logout();
    assert!(!state.session.get_untracked().is_authenticated());

    runtime.dispose();
}

#[wasm_bindgen_test]
fn failed_login_raises_error_toast_and_success_clears_it() {
    let runtime = create_runtime();
    let state = GlobalState::new();

    assert!(!state.login("not-an-email", "password"));
    assert!(!state.session.get_untracked().is_authenticated());
    assert!(state.error.get_untracked().is_some());
    assert!(state.success.get_untracked().is_none());

    // A successful retry replaces the stale error with a confirmation
    assert!(state.login("user@example.com", "password"));
    assert!(state.error.get_untracked().is_none());
    assert!(state.success.get_untracked().is_some());

    runtime.dispose();
}

#[wasm_bindgen_test]
fn toasts_can_be_dismissed() {
    let runtime = create_runtime();
    let state = GlobalState::new();

    state.show_success("done");
    state.show_error("failed");
    assert!(state.success.get_untracked().is_some());
    assert!(state.error.get_untracked().is_some());

    state.clear_success();
    state.clear_error();
    assert!(state.success.get_untracked().is_none());
    assert!(state.error.get_untracked().is_none());

    runtime.dispose();
}
