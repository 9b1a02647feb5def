//! Crowdscope Dashboard
//!
//! Crowd occupancy and demographic analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login screen with permissive email validation (mock auth)
//! - Occupancy overview with line and donut charts
//! - Paginated crowd-entries table
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is hard-coded mock data; there is no backend and no
//! persistence. Session state lives only for the duration of the page.

use leptos::*;

pub mod app;
pub mod components;
pub mod data;
pub mod pager;
pub mod pages;
pub mod state;

/// Set up panic reporting and mount the app to the document body
pub fn run() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
