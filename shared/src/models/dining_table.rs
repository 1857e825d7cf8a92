//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy of a table together with the attributes only that state carries.
///
/// `party_size` exists only while occupied and `reservation_time` only while
/// reserved, so a free table can never carry either.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "occupancy")]
pub enum TableOccupancy {
    #[default]
    Free,
    Occupied { party_size: u32 },
    /// `reservation_time` is epoch millis
    Reserved { reservation_time: i64 },
}

impl TableOccupancy {
    pub fn status(&self) -> TableStatus {
        match self {
            Self::Free => TableStatus::Free,
            Self::Occupied { .. } => TableStatus::Occupied,
            Self::Reserved { .. } => TableStatus::Reserved,
        }
    }
}

/// Flat occupancy value, used for filtering, counters and error reporting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TableStatus {
    Free,
    Occupied,
    Reserved,
}

impl TableStatus {
    pub const ALL: [TableStatus; 3] =
        [TableStatus::Free, TableStatus::Occupied, TableStatus::Reserved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupancy actions offered on the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TableAction {
    /// Free -> Occupied
    Occupy,
    /// Free -> Reserved
    Reserve,
    /// Reserved -> Occupied
    ConfirmArrival,
    /// Reserved -> Free
    CancelReservation,
    /// Occupied -> Free
    CloseBill,
}

impl TableAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Occupy => "occupy",
            Self::Reserve => "reserve",
            Self::ConfirmArrival => "confirm_arrival",
            Self::CancelReservation => "cancel_reservation",
            Self::CloseBill => "close_bill",
        }
    }
}

impl fmt::Display for TableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_capacity() -> u32 {
    4
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiningTable {
    pub number: u32,
    #[serde(flatten)]
    pub occupancy: TableOccupancy,
    /// Seats, informational only
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
}

impl DiningTable {
    /// New free table
    pub fn new(number: u32) -> Self {
        Self {
            number,
            occupancy: TableOccupancy::Free,
            capacity: default_capacity(),
            zone: None,
        }
    }

    pub fn status(&self) -> TableStatus {
        self.occupancy.status()
    }

    pub fn party_size(&self) -> Option<u32> {
        match self.occupancy {
            TableOccupancy::Occupied { party_size } => Some(party_size),
            _ => None,
        }
    }

    pub fn reservation_time(&self) -> Option<i64> {
        match self.occupancy {
            TableOccupancy::Reserved { reservation_time } => Some(reservation_time),
            _ => None,
        }
    }
}
