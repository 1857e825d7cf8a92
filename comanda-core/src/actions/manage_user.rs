//! ToggleUserStatus / RemoveUser command handlers

use shared::message::{NotificationLevel, Surface};

use super::{CommandContext, CommandHandler, CommandOutcome};
use crate::core::BoardError;

/// ToggleUserStatus action
#[derive(Debug, Clone)]
pub struct ToggleUserStatusAction {
    pub user_id: i64,
}

impl CommandHandler for ToggleUserStatusAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let (name, status) = ctx
            .board_mut()
            .users_mut()
            .toggle_status(self.user_id)
            .map(|u| (u.name.clone(), u.status))
            .ok_or(BoardError::UserNotFound(self.user_id))?;

        let message = format!("User {name} is now {status}");
        let notices = ctx.notify(Surface::Users, message.clone(), NotificationLevel::Info);
        Ok(CommandOutcome::new(message).with_notices(notices))
    }
}

/// RemoveUser action
#[derive(Debug, Clone)]
pub struct RemoveUserAction {
    pub user_id: i64,
}

impl CommandHandler for RemoveUserAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let removed = ctx
            .board_mut()
            .users_mut()
            .remove(self.user_id)
            .ok_or(BoardError::UserNotFound(self.user_id))?;
        tracing::info!(user_id = removed.id, "User removed");

        let message = format!("User {} removed", removed.name);
        let notices = ctx.notify(Surface::Users, message.clone(), NotificationLevel::Warning);
        Ok(CommandOutcome::new(message).with_notices(notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};
    use shared::models::{User, UserProfile, UserStatus};

    fn board_with_user() -> Board {
        let mut board = Board::new(&Config::default());
        board.users_mut().insert(User {
            id: 10,
            name: "Eva".into(),
            email: "eva@casa.com".into(),
            phone: None,
            profile: UserProfile::Manager,
            status: UserStatus::Active,
            created_at: 0,
        });
        board
    }

    #[test]
    fn test_toggle_status() {
        let mut board = board_with_user();
        let mut ctx = CommandContext::new(&mut board, 0);
        let outcome = ToggleUserStatusAction { user_id: 10 }.execute(&mut ctx).unwrap();
        assert_eq!(outcome.message, "User Eva is now Inactive");
        assert_eq!(board.users()[0].status, UserStatus::Inactive);
    }

    #[test]
    fn test_remove_user() {
        let mut board = board_with_user();
        let mut ctx = CommandContext::new(&mut board, 0);
        RemoveUserAction { user_id: 10 }.execute(&mut ctx).unwrap();
        let err = RemoveUserAction { user_id: 10 }.execute(&mut ctx).unwrap_err();
        assert!(matches!(err, BoardError::UserNotFound(10)));
        assert!(board.users().is_empty());
    }
}
