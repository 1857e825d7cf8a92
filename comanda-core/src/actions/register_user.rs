//! RegisterUser command handler

use shared::intent::RegistrationForm;
use shared::message::{NotificationLevel, Surface};

use super::{CommandContext, CommandHandler, CommandOutcome, OutcomeDetail};
use crate::core::BoardError;

/// RegisterUser action
#[derive(Debug, Clone)]
pub struct RegisterUserAction {
    pub form: RegistrationForm,
}

impl CommandHandler for RegisterUserAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let now = ctx.now;
        let (user_id, name) = {
            let user = ctx.board_mut().users_mut().register(&self.form, now)?;
            (user.id, user.name.clone())
        };
        tracing::info!(user_id, "User registered");

        let message = format!("User {name} registered");
        let notices = ctx.notify(Surface::Users, message.clone(), NotificationLevel::Success);
        Ok(CommandOutcome::new(message)
            .with_notices(notices)
            .with_detail(OutcomeDetail::UserRegistered { user_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};
    use crate::users::FormField;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Dora Alves".into(),
            email: "dora@casa.com".into(),
            phone: String::new(),
            profile: "Cashier".into(),
            password: "Pastel#de#Feira1".into(),
            password_confirmation: "Pastel#de#Feira1".into(),
        }
    }

    #[test]
    fn test_register_then_duplicate() {
        let mut board = Board::new(&Config::default());
        let mut ctx = CommandContext::new(&mut board, 0);

        let outcome = RegisterUserAction { form: form() }.execute(&mut ctx).unwrap();
        assert!(matches!(outcome.detail, Some(OutcomeDetail::UserRegistered { .. })));

        let err = RegisterUserAction { form: form() }.execute(&mut ctx).unwrap_err();
        match err {
            BoardError::Form(errors) => assert_eq!(errors.first_invalid(), Some(FormField::Email)),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(board.users().len(), 1);
    }
}
