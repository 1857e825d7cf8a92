//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type. Handlers validate first and write last, so a
//! failed command leaves the board untouched.

use serde::Serialize;
use shared::intent::UiCommand;
use shared::message::{Notification, NotificationId, NotificationLevel, Surface};
use shared::models::DiningTable;
use shared::order::KitchenOrder;

use crate::core::{Board, BoardError};
use crate::users::PasswordStrength;

mod advance_order;
mod advance_table;
mod generate_password;
mod manage_user;
mod notice;
mod place_order;
mod register_user;
mod set_filter;

pub use advance_order::AdvanceOrderAction;
pub use advance_table::AdvanceTableAction;
pub use generate_password::GeneratePasswordAction;
pub use manage_user::{RemoveUserAction, ToggleUserStatusAction};
pub use notice::{DismissNotificationAction, NotifyAction};
pub use place_order::PlaceOrderAction;
pub use register_user::RegisterUserAction;
pub use set_filter::{SetOrderFilterAction, SetUserFilterAction};

/// Notification side effect of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NoticeEvent {
    Shown {
        surface: Surface,
        notification: Notification,
    },
    Removed {
        surface: Surface,
        id: NotificationId,
    },
}

/// Extra payload some commands hand back to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeDetail {
    UserRegistered { user_id: i64 },
    GeneratedPassword { password: String, strength: PasswordStrength },
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub message: String,
    pub notices: Vec<NoticeEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<OutcomeDetail>,
}

impl CommandOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            notices: Vec::new(),
            detail: None,
        }
    }

    pub fn with_notices(mut self, notices: Vec<NoticeEvent>) -> Self {
        self.notices.extend(notices);
        self
    }

    pub fn with_detail(mut self, detail: OutcomeDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Notifications that became visible
    pub fn shown(&self) -> impl Iterator<Item = (Surface, &Notification)> {
        self.notices.iter().filter_map(|n| match n {
            NoticeEvent::Shown {
                surface,
                notification,
            } => Some((*surface, notification)),
            NoticeEvent::Removed { .. } => None,
        })
    }

    /// Ids removed by expiry, dismissal or supersession
    pub fn removed(&self) -> impl Iterator<Item = NotificationId> + '_ {
        self.notices.iter().filter_map(|n| match n {
            NoticeEvent::Removed { id, .. } => Some(*id),
            NoticeEvent::Shown { .. } => None,
        })
    }
}

/// Execution context handed to every handler
pub struct CommandContext<'a> {
    board: &'a mut Board,
    /// Epoch millis of this command
    pub now: i64,
}

impl<'a> CommandContext<'a> {
    pub fn new(board: &'a mut Board, now: i64) -> Self {
        Self { board, now }
    }

    pub fn board(&self) -> &Board {
        &*self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut *self.board
    }

    /// Copy of an order, for computing its next state
    pub fn load_order(&self, order_id: &str) -> Result<KitchenOrder, BoardError> {
        self.board
            .order(order_id)
            .cloned()
            .ok_or_else(|| BoardError::OrderNotFound(order_id.to_string()))
    }

    pub fn save_order(&mut self, order: KitchenOrder) {
        self.board.upsert_order(order);
    }

    pub fn load_table(&self, number: u32) -> Result<DiningTable, BoardError> {
        self.board
            .table(number)
            .cloned()
            .ok_or(BoardError::TableNotFound(number))
    }

    pub fn save_table(&mut self, table: DiningTable) {
        self.board.upsert_table(table);
    }

    /// Raise a notification on `surface`
    pub fn notify(
        &mut self,
        surface: Surface,
        message: impl Into<String>,
        level: NotificationLevel,
    ) -> Vec<NoticeEvent> {
        let now = self.now;
        self.board.raise(surface, message, level, now)
    }
}

/// A single command's behavior
pub trait CommandHandler {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError>;
}

/// CommandAction enum - dispatches to concrete action implementations
#[derive(Debug, Clone)]
pub enum CommandAction {
    PlaceOrder(PlaceOrderAction),
    AdvanceOrder(AdvanceOrderAction),
    SetOrderFilter(SetOrderFilterAction),
    AdvanceTable(AdvanceTableAction),
    RegisterUser(RegisterUserAction),
    ToggleUserStatus(ToggleUserStatusAction),
    RemoveUser(RemoveUserAction),
    SetUserFilter(SetUserFilterAction),
    GeneratePassword(GeneratePasswordAction),
    Notify(NotifyAction),
    DismissNotification(DismissNotificationAction),
}

impl CommandHandler for CommandAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        match self {
            CommandAction::PlaceOrder(action) => action.execute(ctx),
            CommandAction::AdvanceOrder(action) => action.execute(ctx),
            CommandAction::SetOrderFilter(action) => action.execute(ctx),
            CommandAction::AdvanceTable(action) => action.execute(ctx),
            CommandAction::RegisterUser(action) => action.execute(ctx),
            CommandAction::ToggleUserStatus(action) => action.execute(ctx),
            CommandAction::RemoveUser(action) => action.execute(ctx),
            CommandAction::SetUserFilter(action) => action.execute(ctx),
            CommandAction::GeneratePassword(action) => action.execute(ctx),
            CommandAction::Notify(action) => action.execute(ctx),
            CommandAction::DismissNotification(action) => action.execute(ctx),
        }
    }
}

/// Convert UiCommand to CommandAction
///
/// The only place a UiCommand becomes behavior.
impl From<&UiCommand> for CommandAction {
    fn from(cmd: &UiCommand) -> Self {
        match cmd {
            UiCommand::PlaceOrder { order } => CommandAction::PlaceOrder(PlaceOrderAction {
                order: order.clone(),
            }),
            UiCommand::AdvanceOrder { order_id, action } => {
                CommandAction::AdvanceOrder(AdvanceOrderAction {
                    order_id: order_id.clone(),
                    action: *action,
                })
            }
            UiCommand::SetOrderFilter(dto) => {
                CommandAction::SetOrderFilter(SetOrderFilterAction { filter: dto.clone() })
            }
            UiCommand::AdvanceTable { table, action } => {
                CommandAction::AdvanceTable(AdvanceTableAction {
                    table: *table,
                    action: *action,
                })
            }
            UiCommand::RegisterUser { form } => CommandAction::RegisterUser(RegisterUserAction {
                form: form.clone(),
            }),
            UiCommand::ToggleUserStatus { user_id } => {
                CommandAction::ToggleUserStatus(ToggleUserStatusAction { user_id: *user_id })
            }
            UiCommand::RemoveUser { user_id } => {
                CommandAction::RemoveUser(RemoveUserAction { user_id: *user_id })
            }
            UiCommand::SetUserFilter(dto) => {
                CommandAction::SetUserFilter(SetUserFilterAction { filter: dto.clone() })
            }
            UiCommand::GeneratePassword => CommandAction::GeneratePassword(GeneratePasswordAction),
            UiCommand::Notify {
                surface,
                message,
                level,
            } => CommandAction::Notify(NotifyAction {
                surface: *surface,
                message: message.clone(),
                level: *level,
            }),
            UiCommand::DismissNotification { surface, id } => {
                CommandAction::DismissNotification(DismissNotificationAction {
                    surface: *surface,
                    id: *id,
                })
            }
        }
    }
}
