//! Render models
//!
//! Cards are rebuilt from state on every sync and never patched in place,
//! so a marker can only be present while its state is.

use serde::Serialize;
use shared::models::{DiningTable, TableAction, TableStatus, User, UserProfile, UserStatus};
use shared::order::{KitchenOrder, OrderAction, OrderKind, OrderStatus};
use shared::util::clock_label;

use crate::status::{available_order_actions, available_table_actions};

/// Kitchen board card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderCard {
    pub id: String,
    pub status: OrderStatus,
    pub kind: OrderKind,
    /// Style marker, e.g. `status-in-progress`
    pub marker: &'static str,
    pub status_label: &'static str,
    pub kind_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<u32>,
    /// "2x Feijoada"
    pub items: Vec<String>,
    pub actions: Vec<OrderAction>,
    pub visible: bool,
}

impl OrderCard {
    pub fn build(order: &KitchenOrder, visible: bool) -> Self {
        Self {
            id: order.id.clone(),
            status: order.status,
            kind: order.kind,
            marker: order_marker(order.status),
            status_label: order.status.label(),
            kind_label: order.kind.label(),
            table: order.table,
            items: order
                .items
                .iter()
                .map(|line| format!("{}x {}", line.quantity, line.name))
                .collect(),
            actions: available_order_actions(order.status),
            visible,
        }
    }
}

pub fn order_marker(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "status-pending",
        OrderStatus::InProgress => "status-in-progress",
        OrderStatus::Ready => "status-ready",
        OrderStatus::Delivered => "status-delivered",
    }
}

/// Dashboard table tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCard {
    pub number: u32,
    pub status: TableStatus,
    pub marker: &'static str,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
    /// "HH:MM" of the reservation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_label: Option<String>,
    pub actions: Vec<TableAction>,
}

impl TableCard {
    pub fn build(table: &DiningTable) -> Self {
        let status = table.status();
        Self {
            number: table.number,
            status,
            marker: table_marker(status),
            capacity: table.capacity,
            zone: table.zone.clone(),
            party_size: table.party_size(),
            reservation_label: table.reservation_time().map(clock_label),
            actions: available_table_actions(status),
        }
    }
}

pub fn table_marker(status: TableStatus) -> &'static str {
    match status {
        TableStatus::Free => "table-free",
        TableStatus::Occupied => "table-occupied",
        TableStatus::Reserved => "table-reserved",
    }
}

/// User listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub profile: UserProfile,
    pub status: UserStatus,
    pub marker: &'static str,
    pub visible: bool,
}

impl UserRow {
    pub fn build(user: &User, visible: bool) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            profile: user.profile,
            status: user.status,
            marker: match user.status {
                UserStatus::Active => "user-active",
                UserStatus::Inactive => "user-inactive",
            },
            visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableOccupancy;
    use shared::order::OrderLine;

    #[test]
    fn test_order_card() {
        let mut order = KitchenOrder::new("#42", OrderKind::DineIn)
            .with_table(7)
            .with_item(OrderLine::new("Feijoada", 2));
        order.status = OrderStatus::InProgress;

        let card = OrderCard::build(&order, true);
        assert_eq!(card.marker, "status-in-progress");
        assert_eq!(card.items, vec!["2x Feijoada"]);
        assert_eq!(card.actions, vec![OrderAction::Complete]);
    }

    #[test]
    fn test_delivered_card_has_no_actions() {
        let mut order = KitchenOrder::new("#1", OrderKind::Takeout);
        order.status = OrderStatus::Delivered;
        let card = OrderCard::build(&order, false);
        assert_eq!(card.marker, "status-delivered");
        assert!(card.actions.is_empty());
        assert!(!card.visible);
    }

    #[test]
    fn test_table_card_attributes_follow_occupancy() {
        let mut table = DiningTable::new(7);
        table.occupancy = TableOccupancy::Reserved {
            reservation_time: 1_704_137_400_000,
        };
        let card = TableCard::build(&table);
        assert_eq!(card.marker, "table-reserved");
        assert_eq!(card.reservation_label.as_deref(), Some("19:30"));
        assert_eq!(card.party_size, None);

        table.occupancy = TableOccupancy::Free;
        let card = TableCard::build(&table);
        assert_eq!(card.reservation_label, None);
        assert_eq!(card.actions, vec![TableAction::Occupy, TableAction::Reserve]);
    }
}
