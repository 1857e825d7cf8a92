//! Order lifecycle transitions

use shared::order::{KitchenOrder, OrderAction, OrderStatus};

use super::StatusError;

/// Every order action, in lifecycle order
pub const ORDER_ACTIONS: [OrderAction; 3] =
    [OrderAction::Start, OrderAction::Complete, OrderAction::Deliver];

/// Transition table: `action -> (required from-status, resulting status)`
pub const fn order_transition(action: OrderAction) -> (OrderStatus, OrderStatus) {
    match action {
        OrderAction::Start => (OrderStatus::Pending, OrderStatus::InProgress),
        OrderAction::Complete => (OrderStatus::InProgress, OrderStatus::Ready),
        OrderAction::Deliver => (OrderStatus::Ready, OrderStatus::Delivered),
    }
}

/// Actions valid from `status` (at most one; none once delivered)
pub fn available_order_actions(status: OrderStatus) -> Vec<OrderAction> {
    ORDER_ACTIONS
        .into_iter()
        .filter(|action| order_transition(*action).0 == status)
        .collect()
}

/// Apply `action` to `order`.
///
/// Only `status` changes on success.
pub fn advance_order(
    order: &KitchenOrder,
    action: OrderAction,
) -> Result<KitchenOrder, StatusError> {
    let (from, to) = order_transition(action);
    if order.status != from {
        return Err(StatusError::InvalidOrderTransition {
            order_id: order.id.clone(),
            from: order.status,
            action,
        });
    }

    Ok(KitchenOrder {
        status: to,
        ..order.clone()
    })
}
