//! Order Module
//!
//! Types for the kitchen board:
//! - Kinds, statuses and forward-only actions
//! - The order snapshot the board tracks

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::KitchenOrder;
pub use types::*;
