//! Table occupancy transitions

use shared::models::{DiningTable, TableAction, TableOccupancy, TableStatus};

use super::StatusError;

/// Every table action
pub const TABLE_ACTIONS: [TableAction; 5] = [
    TableAction::Occupy,
    TableAction::Reserve,
    TableAction::ConfirmArrival,
    TableAction::CancelReservation,
    TableAction::CloseBill,
];

/// Values the side effects of a table transition need
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Party size set when a table becomes occupied
    pub default_party_size: u32,
    /// Epoch millis, stored as the reservation time on `reserve`
    pub now: i64,
}

/// Transition table: `action -> (required from-status, resulting status)`
pub const fn table_transition(action: TableAction) -> (TableStatus, TableStatus) {
    match action {
        TableAction::Occupy => (TableStatus::Free, TableStatus::Occupied),
        TableAction::Reserve => (TableStatus::Free, TableStatus::Reserved),
        TableAction::ConfirmArrival => (TableStatus::Reserved, TableStatus::Occupied),
        TableAction::CancelReservation => (TableStatus::Reserved, TableStatus::Free),
        TableAction::CloseBill => (TableStatus::Occupied, TableStatus::Free),
    }
}

/// Actions valid from `status`
pub fn available_table_actions(status: TableStatus) -> Vec<TableAction> {
    TABLE_ACTIONS
        .into_iter()
        .filter(|action| table_transition(*action).0 == status)
        .collect()
}

/// Apply `action` to `table`.
///
/// The new occupancy carries its own attributes, so setting and clearing
/// `party_size` / `reservation_time` happens in the same assignment as the
/// state change.
pub fn advance_table(
    table: &DiningTable,
    action: TableAction,
    ctx: &TransitionContext,
) -> Result<DiningTable, StatusError> {
    let (from, _) = table_transition(action);
    if table.status() != from {
        return Err(StatusError::InvalidTableTransition {
            table: table.number,
            from: table.status(),
            action,
        });
    }

    let occupancy = match action {
        TableAction::Occupy | TableAction::ConfirmArrival => TableOccupancy::Occupied {
            party_size: ctx.default_party_size,
        },
        TableAction::Reserve => TableOccupancy::Reserved {
            reservation_time: ctx.now,
        },
        TableAction::CancelReservation | TableAction::CloseBill => TableOccupancy::Free,
    };

    Ok(DiningTable {
        occupancy,
        ..table.clone()
    })
}
