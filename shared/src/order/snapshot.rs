//! Kitchen order snapshot

use serde::{Deserialize, Serialize};

use super::types::{OrderKind, OrderLine, OrderStatus};

/// Order as tracked by the kitchen board.
///
/// Created externally (order placed), mutated only through the status
/// model, never deleted. `Delivered` is terminal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KitchenOrder {
    /// Opaque, unique order id (e.g. `#42`)
    pub id: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub kind: OrderKind,
    /// Table number for dine-in orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<u32>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Epoch millis when the order was placed
    #[serde(default)]
    pub placed_at: i64,
}

impl KitchenOrder {
    /// New pending order
    pub fn new(id: impl Into<String>, kind: OrderKind) -> Self {
        Self {
            id: id.into(),
            status: OrderStatus::Pending,
            kind,
            table: None,
            items: Vec::new(),
            note: None,
            placed_at: 0,
        }
    }

    pub fn with_table(mut self, table: u32) -> Self {
        self.table = Some(table);
        self
    }

    pub fn with_item(mut self, line: OrderLine) -> Self {
        self.items.push(line);
        self
    }

    pub fn placed_at(mut self, millis: i64) -> Self {
        self.placed_at = millis;
        self
    }

    /// Total number of portions on the ticket
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }
}
