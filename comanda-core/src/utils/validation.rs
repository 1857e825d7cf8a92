//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// User names
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers, separators included
pub const MIN_PHONE_LEN: usize = 8;
pub const MAX_PHONE_LEN: usize = 20;

/// Passwords
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// Notification messages and order notes
pub const MAX_NOTE_LEN: usize = 500;

/// Order identifiers ("#42")
pub const MAX_ORDER_ID_LEN: usize = 32;

/// Items per order
pub const MAX_ORDER_ITEMS: usize = 100;

/// Portions per order line
pub const MAX_ITEM_QUANTITY: u32 = 999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("#42", "order_id", MAX_ORDER_ID_LEN).is_ok());
        assert!(validate_required_text("   ", "order_id", MAX_ORDER_ID_LEN).is_err());
        let long = "x".repeat(MAX_ORDER_ID_LEN + 1);
        assert!(validate_required_text(&long, "order_id", MAX_ORDER_ID_LEN).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let accented = "ã".repeat(MAX_ORDER_ID_LEN);
        assert!(validate_required_text(&accented, "order_id", MAX_ORDER_ID_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("sem cebola".into()), "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }
}
