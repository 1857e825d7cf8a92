//! AdvanceTable command handler

use shared::message::{NotificationLevel, Surface};
use shared::models::TableAction;
use shared::util::clock_label;

use super::{CommandContext, CommandHandler, CommandOutcome};
use crate::core::BoardError;
use crate::status::{TransitionContext, advance_table};

/// AdvanceTable action
#[derive(Debug, Clone)]
pub struct AdvanceTableAction {
    pub table: u32,
    pub action: TableAction,
}

impl CommandHandler for AdvanceTableAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let table = ctx.load_table(self.table)?;
        let transition = TransitionContext {
            default_party_size: ctx.board().default_party_size(),
            now: ctx.now,
        };
        let next = advance_table(&table, self.action, &transition)?;

        let n = next.number;
        let (message, level) = match self.action {
            TableAction::Occupy => (
                format!("Table {n} occupied ({} guests)", next.party_size().unwrap_or_default()),
                NotificationLevel::Info,
            ),
            TableAction::Reserve => (
                format!("Table {n} reserved at {}", clock_label(ctx.now)),
                NotificationLevel::Info,
            ),
            TableAction::ConfirmArrival => {
                (format!("Guests arrived at table {n}"), NotificationLevel::Success)
            }
            TableAction::CancelReservation => (
                format!("Reservation for table {n} cancelled"),
                NotificationLevel::Warning,
            ),
            TableAction::CloseBill => {
                (format!("Table {n} bill closed"), NotificationLevel::Success)
            }
        };

        tracing::info!(
            table = n,
            from = %table.status(),
            to = %next.status(),
            "Table advanced"
        );
        ctx.save_table(next);

        let notices = ctx.notify(Surface::Dashboard, message.clone(), level);
        Ok(CommandOutcome::new(message).with_notices(notices))
    }
}
