//! Seed file loading
//!
//! ```json
//! {
//!   "orders": [{
//!     "id": "#42", "kind": "DineIn", "table": 7,
//!     "items": [{ "name": "Feijoada", "quantity": 2 }]
//!   }],
//!   "tables": [{ "number": 7, "occupancy": "Free", "capacity": 4 }],
//!   "users":  []
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{DiningTable, User};
use shared::order::KitchenOrder;

/// Initial records for a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    pub orders: Vec<KitchenOrder>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardSeed {
    /// `count` free tables numbered from 1
    pub fn with_free_tables(count: u32) -> Self {
        Self {
            tables: (1..=count).map(DiningTable::new).collect(),
            ..Self::default()
        }
    }
}

/// Read a seed file
pub fn load_seed(path: &Path) -> Result<BoardSeed, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("cannot read seed file {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid seed file {}: {e}", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableStatus;
    use std::io::Write;

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{
                "orders": [{{ "id": "#42", "kind": "DineIn", "table": 7 }}],
                "tables": [{{ "number": 7, "occupancy": "Reserved", "reservation_time": 1000 }}]
            }}"##
        )
        .unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.orders[0].id, "#42");
        assert_eq!(seed.tables[0].status(), TableStatus::Reserved);
        assert_eq!(seed.tables[0].reservation_time(), Some(1000));
        assert!(seed.users.is_empty());
    }

    #[test]
    fn test_missing_and_malformed_seed() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_seed(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_with_free_tables() {
        let seed = BoardSeed::with_free_tables(3);
        let numbers: Vec<u32> = seed.tables.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
