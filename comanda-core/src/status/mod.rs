//! Status model - legal transition graphs for orders and tables
//!
//! Pure functions only: every transition takes the current record by
//! reference and returns the next record, or a [`StatusError`] with the
//! input left untouched. Rendering and notification are the caller's job.
//!
//! ```text
//! Order:  Pending --start--> InProgress --complete--> Ready --deliver--> Delivered
//!
//! Table:  Free --occupy--> Occupied --close_bill--> Free
//!         Free --reserve--> Reserved --confirm_arrival--> Occupied
//!                           Reserved --cancel_reservation--> Free
//! ```

mod order;
mod table;

pub use order::{ORDER_ACTIONS, advance_order, available_order_actions, order_transition};
pub use table::{
    TABLE_ACTIONS, TransitionContext, advance_table, available_table_actions, table_transition,
};

use shared::error::{AppError, ErrorCode};
use shared::models::{TableAction, TableStatus};
use shared::order::{OrderAction, OrderStatus};
use thiserror::Error;

/// Transition errors
///
/// Both variants are the "invalid transition" class: the action does not
/// apply to the record's current state and nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("Order {order_id}: cannot {action} while {from}")]
    InvalidOrderTransition {
        order_id: String,
        from: OrderStatus,
        action: OrderAction,
    },

    #[error("Table {table}: cannot {action} while {from}")]
    InvalidTableTransition {
        table: u32,
        from: TableStatus,
        action: TableAction,
    },
}

impl From<StatusError> for AppError {
    fn from(err: StatusError) -> Self {
        let message = err.to_string();
        match err {
            StatusError::InvalidOrderTransition {
                order_id,
                from,
                action,
            } => {
                let code = if from.is_terminal() {
                    ErrorCode::OrderAlreadyDelivered
                } else {
                    ErrorCode::OrderInvalidTransition
                };
                AppError::with_message(code, message)
                    .with_detail("order_id", order_id)
                    .with_detail("from", from.as_str())
                    .with_detail("action", action.as_str())
            }
            StatusError::InvalidTableTransition {
                table,
                from,
                action,
            } => {
                let code = match (from, action) {
                    (TableStatus::Occupied, TableAction::Occupy) => ErrorCode::TableOccupied,
                    (TableStatus::Free, TableAction::CloseBill) => ErrorCode::TableAlreadyEmpty,
                    _ => ErrorCode::TableInvalidTransition,
                };
                AppError::with_message(code, message)
                    .with_detail("table", table)
                    .with_detail("from", from.as_str())
                    .with_detail("action", action.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_order_maps_to_already_delivered() {
        let err = StatusError::InvalidOrderTransition {
            order_id: "#1".into(),
            from: OrderStatus::Delivered,
            action: OrderAction::Deliver,
        };
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::OrderAlreadyDelivered);
    }

    #[test]
    fn test_order_error_carries_details() {
        let err = StatusError::InvalidOrderTransition {
            order_id: "#42".into(),
            from: OrderStatus::InProgress,
            action: OrderAction::Start,
        };
        assert_eq!(err.to_string(), "Order #42: cannot start while InProgress");
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::OrderInvalidTransition);
        let details = app.details.unwrap();
        assert_eq!(details.get("from").unwrap(), "InProgress");
        assert_eq!(details.get("action").unwrap(), "start");
    }

    #[test]
    fn test_table_error_codes() {
        let occupied: AppError = StatusError::InvalidTableTransition {
            table: 7,
            from: TableStatus::Occupied,
            action: TableAction::Occupy,
        }
        .into();
        assert_eq!(occupied.code, ErrorCode::TableOccupied);

        let empty: AppError = StatusError::InvalidTableTransition {
            table: 7,
            from: TableStatus::Free,
            action: TableAction::CloseBill,
        }
        .into();
        assert_eq!(empty.code, ErrorCode::TableAlreadyEmpty);

        let other: AppError = StatusError::InvalidTableTransition {
            table: 7,
            from: TableStatus::Reserved,
            action: TableAction::CloseBill,
        }
        .into();
        assert_eq!(other.code, ErrorCode::TableInvalidTransition);
    }
}
