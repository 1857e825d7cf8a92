//! AdvanceOrder command handler
//!
//! Moves an order one step along Pending -> InProgress -> Ready -> Delivered.

use shared::message::{NotificationLevel, Surface};
use shared::order::{OrderAction, OrderStatus};

use super::{CommandContext, CommandHandler, CommandOutcome};
use crate::core::BoardError;
use crate::status::advance_order;

/// AdvanceOrder action
#[derive(Debug, Clone)]
pub struct AdvanceOrderAction {
    pub order_id: String,
    pub action: OrderAction,
}

impl CommandHandler for AdvanceOrderAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        let order = ctx.load_order(&self.order_id)?;
        let next = advance_order(&order, self.action)?;

        let id = &next.id;
        let (message, level) = match next.status {
            OrderStatus::InProgress => (format!("Order {id} in progress"), NotificationLevel::Info),
            OrderStatus::Ready => (format!("Order {id} is ready"), NotificationLevel::Success),
            OrderStatus::Delivered => (format!("Order {id} delivered"), NotificationLevel::Success),
            OrderStatus::Pending => (format!("Order {id} pending"), NotificationLevel::Info),
        };

        tracing::info!(
            order_id = %next.id,
            from = %order.status.as_str(),
            to = %next.status.as_str(),
            "Order advanced"
        );
        ctx.save_order(next);

        let notices = ctx.notify(Surface::Kitchen, message.clone(), level);
        Ok(CommandOutcome::new(message).with_notices(notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};
    use crate::status::StatusError;
    use shared::order::{KitchenOrder, OrderKind};

    fn board_with(id: &str) -> Board {
        let mut board = Board::new(&Config::default());
        board.upsert_order(KitchenOrder::new(id, OrderKind::DineIn));
        board
    }

    fn advance(
        board: &mut Board,
        id: &str,
        action: OrderAction,
    ) -> Result<CommandOutcome, BoardError> {
        let mut ctx = CommandContext::new(board, 0);
        AdvanceOrderAction {
            order_id: id.to_string(),
            action,
        }
        .execute(&mut ctx)
    }

    #[test]
    fn test_start_twice_keeps_in_progress() {
        let mut board = board_with("#42");
        advance(&mut board, "#42", OrderAction::Start).unwrap();
        assert_eq!(board.order("#42").unwrap().status, OrderStatus::InProgress);

        let err = advance(&mut board, "#42", OrderAction::Start).unwrap_err();
        assert!(matches!(
            err,
            BoardError::Transition(StatusError::InvalidOrderTransition { .. })
        ));
        assert_eq!(board.order("#42").unwrap().status, OrderStatus::InProgress);
    }

    #[test]
    fn test_invalid_transition_raises_no_notification() {
        let mut board = board_with("#7");
        assert!(advance(&mut board, "#7", OrderAction::Deliver).is_err());
        assert!(board.notifications(Surface::Kitchen, 0).is_empty());
    }

    #[test]
    fn test_full_lifecycle_notifies_kitchen() {
        let mut board = board_with("#8");
        advance(&mut board, "#8", OrderAction::Start).unwrap();
        advance(&mut board, "#8", OrderAction::Complete).unwrap();
        let outcome = advance(&mut board, "#8", OrderAction::Deliver).unwrap();
        assert_eq!(outcome.message, "Order #8 delivered");
        assert_eq!(board.order("#8").unwrap().status, OrderStatus::Delivered);

        // single-slot: only the last one is still showing
        let visible = board.notifications(Surface::Kitchen, 0);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "Order #8 delivered");
    }

    #[test]
    fn test_unknown_order() {
        let mut board = board_with("#1");
        let err = advance(&mut board, "#404", OrderAction::Start).unwrap_err();
        assert!(matches!(err, BoardError::OrderNotFound(id) if id == "#404"));
    }
}
