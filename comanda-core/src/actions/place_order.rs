//! PlaceOrder command handler
//!
//! Puts a new order on the kitchen board. New orders always enter as
//! Pending, whatever status the payload carries.

use shared::message::{NotificationLevel, Surface};
use shared::order::{KitchenOrder, OrderStatus};

use super::{CommandContext, CommandHandler, CommandOutcome};
use crate::core::BoardError;
use crate::utils::validation::{
    MAX_ITEM_QUANTITY, MAX_NOTE_LEN, MAX_ORDER_ID_LEN, MAX_ORDER_ITEMS, validate_optional_text,
    validate_required_text,
};

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub order: KitchenOrder,
}

impl CommandHandler for PlaceOrderAction {
    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<CommandOutcome, BoardError> {
        // 1. Validate payload
        let id = self.order.id.trim();
        validate_required_text(id, "order_id", MAX_ORDER_ID_LEN)
            .map_err(|e| BoardError::InvalidOperation(e.message))?;
        validate_optional_text(&self.order.note, "note", MAX_NOTE_LEN)
            .map_err(|e| BoardError::InvalidOperation(e.message))?;
        if self.order.items.len() > MAX_ORDER_ITEMS {
            return Err(BoardError::InvalidOperation(format!(
                "too many items ({}, max {MAX_ORDER_ITEMS})",
                self.order.items.len()
            )));
        }
        if self.order.items.iter().any(|line| line.quantity == 0) {
            return Err(BoardError::InvalidOperation(
                "item quantity must be at least 1".to_string(),
            ));
        }
        if let Some(line) = self
            .order
            .items
            .iter()
            .find(|line| line.quantity > MAX_ITEM_QUANTITY)
        {
            return Err(BoardError::InvalidOperation(format!(
                "quantity of {} exceeds {MAX_ITEM_QUANTITY}",
                line.name
            )));
        }

        // 2. Reject duplicates
        if ctx.board().order(id).is_some() {
            return Err(BoardError::OrderExists(id.to_string()));
        }

        // 3. Store as Pending
        let order = KitchenOrder {
            id: id.to_string(),
            status: OrderStatus::Pending,
            placed_at: if self.order.placed_at > 0 {
                self.order.placed_at
            } else {
                ctx.now
            },
            ..self.order.clone()
        };
        let message = format!("Order {} received ({} items)", order.id, order.item_count());
        ctx.save_order(order);

        let notices = ctx.notify(Surface::Kitchen, message.clone(), NotificationLevel::Info);
        Ok(CommandOutcome::new(message).with_notices(notices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Config};
    use shared::order::{OrderKind, OrderLine};

    fn board() -> Board {
        Board::new(&Config::default())
    }

    #[test]
    fn test_place_order_enters_pending() {
        let mut board = board();
        let mut order = KitchenOrder::new("#42", OrderKind::DineIn)
            .with_table(7)
            .with_item(OrderLine::new("Feijoada", 2));
        order.status = OrderStatus::Ready;

        let mut ctx = CommandContext::new(&mut board, 1_000);
        let outcome = PlaceOrderAction { order }.execute(&mut ctx).unwrap();
        assert_eq!(outcome.shown().count(), 1);

        let stored = board.order("#42").unwrap();
        assert_eq!(stored.status, OrderStatus::Pending);
        assert_eq!(stored.placed_at, 1_000);
        assert_eq!(stored.table, Some(7));
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let mut board = board();
        let order = KitchenOrder::new("#1", OrderKind::Takeout);
        let mut ctx = CommandContext::new(&mut board, 0);
        PlaceOrderAction { order: order.clone() }.execute(&mut ctx).unwrap();
        let err = PlaceOrderAction { order }.execute(&mut ctx).unwrap_err();
        assert!(matches!(err, BoardError::OrderExists(id) if id == "#1"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut board = board();
        let mut ctx = CommandContext::new(&mut board, 0);
        let err = PlaceOrderAction {
            order: KitchenOrder::new("  ", OrderKind::DineIn),
        }
        .execute(&mut ctx)
        .unwrap_err();
        assert!(matches!(err, BoardError::InvalidOperation(_)));
        assert!(board.orders().is_empty());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut board = board();
        let mut ctx = CommandContext::new(&mut board, 0);
        let order =
            KitchenOrder::new("#3", OrderKind::DineIn).with_item(OrderLine::new("Café", 0));
        assert!(PlaceOrderAction { order }.execute(&mut ctx).is_err());
    }

    #[test]
    fn test_oversized_quantity_rejected() {
        let mut board = board();
        let mut ctx = CommandContext::new(&mut board, 0);
        let order = KitchenOrder::new("#4", OrderKind::DineIn)
            .with_item(OrderLine::new("Pastel", u32::MAX))
            .with_item(OrderLine::new("Caldo", 1));
        let err = PlaceOrderAction { order }.execute(&mut ctx).unwrap_err();
        assert!(matches!(err, BoardError::InvalidOperation(msg) if msg.contains("Pastel")));
        assert!(board.orders().is_empty());
        assert!(board.notifications(Surface::Kitchen, 0).is_empty());
    }

    #[test]
    fn test_max_quantity_accepted() {
        let mut board = board();
        let mut ctx = CommandContext::new(&mut board, 0);
        let order = KitchenOrder::new("#5", OrderKind::Takeout)
            .with_item(OrderLine::new("Pão de queijo", MAX_ITEM_QUANTITY))
            .with_item(OrderLine::new("Café", 1));
        let outcome = PlaceOrderAction { order }.execute(&mut ctx).unwrap();
        assert_eq!(outcome.message, "Order #5 received (1000 items)");
    }
}
