//! ViewSync - one-way projection of board state onto render models
//!
//! `sync` rebuilds every card from the current [`Board`], compares it with
//! the card rendered last time and emits a [`ViewPatch`] only where they
//! differ. Items that did not change produce nothing.

mod cards;

pub use cards::{OrderCard, TableCard, UserRow, order_marker, table_marker};

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::core::Board;

/// One render instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ViewPatch {
    RenderOrder { card: OrderCard },
    RemoveOrder { id: String },
    RenderTable { card: TableCard },
    RemoveTable { number: u32 },
    RenderUser { row: UserRow },
    RemoveUser { id: i64 },
}

/// Last rendered models
#[derive(Debug, Clone, Default)]
pub struct ViewSync {
    orders: HashMap<String, OrderCard>,
    tables: BTreeMap<u32, TableCard>,
    users: HashMap<i64, UserRow>,
}

impl ViewSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patches that bring the rendered view in line with `board`
    pub fn sync(&mut self, board: &Board) -> Vec<ViewPatch> {
        let mut patches = Vec::new();
        self.sync_orders(board, &mut patches);
        self.sync_tables(board, &mut patches);
        self.sync_users(board, &mut patches);

        if !patches.is_empty() {
            tracing::trace!(patches = patches.len(), "View synced");
        }
        patches
    }

    fn sync_orders(&mut self, board: &Board, patches: &mut Vec<ViewPatch>) {
        let visible: HashSet<&str> = board
            .visible_orders()
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        let mut seen = HashSet::new();

        for order in board.orders() {
            let card = OrderCard::build(order, visible.contains(order.id.as_str()));
            seen.insert(order.id.clone());
            if self.orders.get(&order.id) != Some(&card) {
                self.orders.insert(order.id.clone(), card.clone());
                patches.push(ViewPatch::RenderOrder { card });
            }
        }

        let mut gone: Vec<String> = self
            .orders
            .keys()
            .filter(|id| !seen.contains(*id))
            .cloned()
            .collect();
        gone.sort();
        for id in gone {
            self.orders.remove(&id);
            patches.push(ViewPatch::RemoveOrder { id });
        }
    }

    fn sync_tables(&mut self, board: &Board, patches: &mut Vec<ViewPatch>) {
        let mut seen = HashSet::new();

        for table in board.tables() {
            let card = TableCard::build(table);
            seen.insert(table.number);
            if self.tables.get(&table.number) != Some(&card) {
                self.tables.insert(table.number, card.clone());
                patches.push(ViewPatch::RenderTable { card });
            }
        }

        let gone: Vec<u32> = self
            .tables
            .keys()
            .copied()
            .filter(|n| !seen.contains(n))
            .collect();
        for number in gone {
            self.tables.remove(&number);
            patches.push(ViewPatch::RemoveTable { number });
        }
    }

    fn sync_users(&mut self, board: &Board, patches: &mut Vec<ViewPatch>) {
        let visible: HashSet<i64> = board.visible_users().into_iter().map(|u| u.id).collect();
        let mut seen = HashSet::new();

        for user in board.users() {
            let row = UserRow::build(user, visible.contains(&user.id));
            seen.insert(user.id);
            if self.users.get(&user.id) != Some(&row) {
                self.users.insert(user.id, row.clone());
                patches.push(ViewPatch::RenderUser { row });
            }
        }

        let mut gone: Vec<i64> = self
            .users
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        gone.sort_unstable();
        for id in gone {
            self.users.remove(&id);
            patches.push(ViewPatch::RemoveUser { id });
        }
    }

    pub fn order_card(&self, id: &str) -> Option<&OrderCard> {
        self.orders.get(id)
    }

    pub fn table_card(&self, number: u32) -> Option<&TableCard> {
        self.tables.get(&number)
    }

    pub fn user_row(&self, id: i64) -> Option<&UserRow> {
        self.users.get(&id)
    }
}
