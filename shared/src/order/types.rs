//! Order lifecycle types shared between the core and the UI layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Order Kind
// ============================================================================

/// 服务类型 - classification only, never affects transitions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderKind {
    /// 堂食
    #[default]
    DineIn,
    /// 外带
    Takeout,
    /// 外卖
    Delivery,
}

impl OrderKind {
    pub const ALL: [OrderKind; 3] = [OrderKind::DineIn, OrderKind::Takeout, OrderKind::Delivery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "DineIn",
            Self::Takeout => "Takeout",
            Self::Delivery => "Delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DineIn => "Dine-in",
            Self::Takeout => "Takeout",
            Self::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Kitchen lifecycle of an order.
///
/// Variants are declared in lifecycle order, so the derived `Ord` is the
/// lifecycle order: `Pending < InProgress < Ready < Delivered`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
        }
    }

    /// Human-readable label for cards and notifications
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
        }
    }

    /// Terminal status, no further action exists
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order Action
// ============================================================================

/// Forward-only kitchen actions. There is deliberately no action that moves
/// an order backward or skips a status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderAction {
    /// Pending -> InProgress
    Start,
    /// InProgress -> Ready
    Complete,
    /// Ready -> Delivered
    Deliver,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Deliver => "deliver",
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for OrderAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "complete" => Ok(Self::Complete),
            "deliver" => Ok(Self::Deliver),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

// ============================================================================
// Order Lines
// ============================================================================

/// One line of an order ticket as shown on the kitchen board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_order_is_lifecycle_order() {
        assert!(OrderStatus::Pending < OrderStatus::InProgress);
        assert!(OrderStatus::InProgress < OrderStatus::Ready);
        assert!(OrderStatus::Ready < OrderStatus::Delivered);
        assert!(OrderStatus::Delivered.is_terminal());
    }

    #[test]
    fn test_action_serde_names() {
        let json = serde_json::to_string(&OrderAction::Deliver).unwrap();
        assert_eq!(json, "\"deliver\"");
        let action: OrderAction = serde_json::from_str("\"start\"").unwrap();
        assert_eq!(action, OrderAction::Start);
    }

    #[test]
    fn test_action_from_str_is_case_insensitive() {
        assert_eq!("Complete".parse::<OrderAction>(), Ok(OrderAction::Complete));
        assert!("rewind".parse::<OrderAction>().is_err());
    }

    #[test]
    fn test_status_serializes_as_variant_name() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
        assert_eq!(OrderStatus::InProgress.as_str(), "InProgress");
    }
}
