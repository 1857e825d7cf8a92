//! Shared types for Comanda
//!
//! Domain types used by the state core and by whatever UI layer drives it:
//! order and table models, UI commands, notification payloads and the
//! unified error system.

pub mod error;
pub mod intent;
pub mod message;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, CommandResponse, ErrorCode};
pub use intent::UiCommand;
pub use message::{Notification, NotificationId, NotificationLevel, Surface};
