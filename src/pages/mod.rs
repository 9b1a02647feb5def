//! Pages
//!
//! Top-level page components for each route.

pub mod entries;
pub mod login;
pub mod overview;

pub use entries::CrowdEntries;
pub use login::Login;
pub use overview::Overview;
