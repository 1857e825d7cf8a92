//! Data models
//!
//! Shared between the state core and the UI layer.

pub mod dining_table;
pub mod user;

// Re-exports
pub use dining_table::*;
pub use user::*;
