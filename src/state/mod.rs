//! State Management
//!
//! Global reactive state and the explicit session model.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{Session, User};
