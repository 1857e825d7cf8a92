//! Intent 模块 - UI 命令的统一分发入口
//!
//! The UI layer classifies every click into one [`UiCommand`]. Nothing in
//! the core reads state back out of markup; commands are the only input.
//!
//! ```json
//! { "command": "AdvanceOrder", "params": { "order_id": "#42", "action": "start" } }
//! ```

pub mod dto;

use serde::{Deserialize, Serialize};

use crate::message::{NotificationId, NotificationLevel, Surface};
use crate::models::TableAction;
use crate::order::{KitchenOrder, OrderAction};

// Re-exports
pub use dto::*;

/// UI command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", content = "params")]
pub enum UiCommand {
    // ===== 厨房 =====
    /// Put a new order on the kitchen board
    PlaceOrder { order: KitchenOrder },
    /// Move an order one step forward
    AdvanceOrder { order_id: String, action: OrderAction },
    /// Replace the kitchen board filter
    SetOrderFilter(OrderFilterDto),

    // ===== 桌台 =====
    AdvanceTable { table: u32, action: TableAction },

    // ===== 用户 =====
    RegisterUser { form: RegistrationForm },
    ToggleUserStatus { user_id: i64 },
    RemoveUser { user_id: i64 },
    SetUserFilter(UserFilterDto),
    /// Suggest a random password for the registration form
    GeneratePassword,

    // ===== 通知 =====
    Notify {
        surface: Surface,
        message: String,
        #[serde(default)]
        level: NotificationLevel,
    },
    DismissNotification { surface: Surface, id: NotificationId },
}

impl UiCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlaceOrder { .. } => "place_order",
            Self::AdvanceOrder { .. } => "advance_order",
            Self::SetOrderFilter(_) => "set_order_filter",
            Self::AdvanceTable { .. } => "advance_table",
            Self::RegisterUser { .. } => "register_user",
            Self::ToggleUserStatus { .. } => "toggle_user_status",
            Self::RemoveUser { .. } => "remove_user",
            Self::SetUserFilter(_) => "set_user_filter",
            Self::GeneratePassword => "generate_password",
            Self::Notify { .. } => "notify",
            Self::DismissNotification { .. } => "dismiss_notification",
        }
    }
}
