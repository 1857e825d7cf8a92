//! GeneratePassword command handler

use super::{CommandContext, CommandHandler, CommandOutcome, OutcomeDetail};
use crate::core::BoardError;
use crate::users::{generate_password, password_strength};

/// GeneratePassword action
#[derive(Debug, Clone)]
pub struct GeneratePasswordAction;

impl CommandHandler for GeneratePasswordAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let password = generate_password(ctx.board().generated_password_len());
        let strength = password_strength(&password);
        Ok(CommandOutcome::new("Password generated")
            .with_detail(OutcomeDetail::GeneratedPassword { password, strength }))
    }
}
