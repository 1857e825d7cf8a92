//! Notify / DismissNotification command handlers

use shared::message::{NotificationId, NotificationLevel, Surface};

use super::{CommandContext, CommandHandler, CommandOutcome, NoticeEvent};
use crate::core::BoardError;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

/// Notify action
#[derive(Debug, Clone)]
pub struct NotifyAction {
    pub surface: Surface,
    pub message: String,
    pub level: NotificationLevel,
}

impl CommandHandler for NotifyAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        validate_required_text(&self.message, "message", MAX_NOTE_LEN)
            .map_err(|e| BoardError::InvalidOperation(e.message))?;
        let notices = ctx.notify(self.surface, self.message.clone(), self.level);
        Ok(CommandOutcome::new(format!("Notified {}", self.surface)).with_notices(notices))
    }
}

/// DismissNotification action
#[derive(Debug, Clone)]
pub struct DismissNotificationAction {
    pub surface: Surface,
    pub id: NotificationId,
}

impl CommandHandler for DismissNotificationAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        ctx.board_mut()
            .dismiss_notification(self.surface, self.id)
            .ok_or(BoardError::NotificationNotFound {
                surface: self.surface,
                id: self.id,
            })?;

        Ok(CommandOutcome::new("Notification dismissed").with_notices(vec![NoticeEvent::Removed {
            surface: self.surface,
            id: self.id,
        }]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};

    #[test]
    fn test_notify_then_dismiss() {
        let mut board = Board::new(&Config::default());
        let mut ctx = CommandContext::new(&mut board, 0);

        let outcome = NotifyAction {
            surface: Surface::Dashboard,
            message: "Kitchen closes at 23:00".into(),
            level: NotificationLevel::Warning,
        }
        .execute(&mut ctx)
        .unwrap();
        let (_, shown) = outcome.shown().next().unwrap();
        let id = shown.id;

        let outcome = DismissNotificationAction {
            surface: Surface::Dashboard,
            id,
        }
        .execute(&mut ctx)
        .unwrap();
        assert_eq!(outcome.removed().collect::<Vec<_>>(), vec![id]);

        let again = DismissNotificationAction {
            surface: Surface::Dashboard,
            id,
        }
        .execute(&mut ctx);
        assert!(matches!(again, Err(BoardError::NotificationNotFound { .. })));
        assert!(board.notifications(Surface::Dashboard, 0).is_empty());
    }

    #[test]
    fn test_blank_message_rejected() {
        let mut board = Board::new(&Config::default());
        let mut ctx = CommandContext::new(&mut board, 0);
        let result = NotifyAction {
            surface: Surface::Kitchen,
            message: "   ".into(),
            level: NotificationLevel::Info,
        }
        .execute(&mut ctx);
        assert!(result.is_err());
    }
}
