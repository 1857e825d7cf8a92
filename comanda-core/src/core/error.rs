use shared::error::{AppError, ErrorCode};
use shared::message::{NotificationId, Surface};
use thiserror::Error;

use crate::status::StatusError;
use crate::users::FormErrors;

/// Errors raised while executing a board command
#[derive(Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Transition(#[from] StatusError),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already on the board: {0}")]
    OrderExists(String),

    #[error("Table not found: {0}")]
    TableNotFound(u32),

    #[error("Table listed twice: {0}")]
    TableExists(u32),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Notification {id} not found on {surface}")]
    NotificationNotFound { surface: Surface, id: NotificationId },

    #[error(transparent)]
    Form(#[from] FormErrors),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Transition(e) => e.into(),
            BoardError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {id}"))
                    .with_detail("order_id", id)
            }
            BoardError::OrderExists(id) => AppError::with_message(
                ErrorCode::OrderAlreadyExists,
                format!("Order already on the board: {id}"),
            )
            .with_detail("order_id", id),
            BoardError::TableNotFound(n) => {
                AppError::with_message(ErrorCode::TableNotFound, format!("Table not found: {n}"))
                    .with_detail("table", n)
            }
            BoardError::TableExists(n) => {
                AppError::with_message(ErrorCode::AlreadyExists, format!("Table listed twice: {n}"))
                    .with_detail("table", n)
            }
            BoardError::UserNotFound(id) => {
                AppError::with_message(ErrorCode::UserNotFound, format!("User not found: {id}"))
                    .with_detail("user_id", id)
            }
            BoardError::NotificationNotFound { surface, id } => AppError::with_message(
                ErrorCode::NotificationNotFound,
                format!("Notification {id} not found on {surface}"),
            )
            .with_detail("surface", surface.to_string())
            .with_detail("id", id.to_string()),
            BoardError::Form(errors) => errors.into(),
            BoardError::InvalidOperation(msg) => AppError::invalid_request(msg),
        }
    }
}
