//! Board - the single state container of a session
//!
//! Orders, tables, users, the two filters and one notification channel per
//! surface. All mutation goes through [`Board::dispatch`]; one command runs
//! to completion before the next.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use shared::error::AppError;
use shared::intent::UiCommand;
use shared::message::{Notification, NotificationId, NotificationLevel, Surface};
use shared::models::{DiningTable, TableStatus, User};
use shared::order::{KitchenOrder, OrderStatus};
use shared::util::now_millis;

use super::config::Config;
use super::error::BoardError;
use super::seed::BoardSeed;
use crate::actions::{CommandAction, CommandContext, CommandHandler, CommandOutcome, NoticeEvent};
use crate::filter::{FilterCriteria, visible};
use crate::notify::NotificationChannel;
use crate::users::UserRegistry;

#[derive(Debug, Clone)]
pub struct Board {
    orders: Vec<KitchenOrder>,
    tables: BTreeMap<u32, DiningTable>,
    users: UserRegistry,
    order_filter: FilterCriteria,
    user_filter: FilterCriteria,
    channels: HashMap<Surface, NotificationChannel>,
    default_party_size: u32,
    generated_password_len: usize,
}

impl Board {
    /// Empty board
    pub fn new(config: &Config) -> Self {
        let channels = Surface::ALL
            .into_iter()
            .map(|surface| (surface, NotificationChannel::new(config.channel(surface))))
            .collect();

        Self {
            orders: Vec::new(),
            tables: BTreeMap::new(),
            users: UserRegistry::new(),
            order_filter: FilterCriteria::all(),
            user_filter: FilterCriteria::all(),
            channels,
            default_party_size: config.default_party_size,
            generated_password_len: config.generated_password_len,
        }
    }

    /// Board preloaded with seed records. Duplicate ids are rejected.
    pub fn from_seed(config: &Config, seed: BoardSeed) -> Result<Self, BoardError> {
        let mut board = Self::new(config);

        for order in seed.orders {
            if board.order(&order.id).is_some() {
                return Err(BoardError::OrderExists(order.id));
            }
            board.orders.push(order);
        }
        for table in seed.tables {
            if board.tables.contains_key(&table.number) {
                return Err(BoardError::TableExists(table.number));
            }
            board.tables.insert(table.number, table);
        }
        for user in seed.users {
            let id = user.id;
            if !board.users.insert(user) {
                return Err(BoardError::InvalidOperation(format!(
                    "user {id} listed twice or e-mail already used"
                )));
            }
        }

        tracing::info!(
            orders = board.orders.len(),
            tables = board.tables.len(),
            users = board.users.len(),
            "Board seeded"
        );
        Ok(board)
    }

    // ========== Dispatch ==========

    /// Apply one command at the current wall-clock time
    pub fn dispatch(&mut self, cmd: &UiCommand) -> Result<CommandOutcome, AppError> {
        self.dispatch_at(cmd, now_millis())
    }

    /// Apply one command at `now` (epoch millis)
    ///
    /// Expired notifications are swept first and reported as removed. A
    /// rejected command drops that report; callers holding timers should
    /// [`sweep`](Self::sweep) on their own before dispatching.
    pub fn dispatch_at(&mut self, cmd: &UiCommand, now: i64) -> Result<CommandOutcome, AppError> {
        let expired = self.sweep(now);
        let action = CommandAction::from(cmd);
        let mut ctx = CommandContext::new(self, now);

        match action.execute(&mut ctx) {
            Ok(mut outcome) => {
                tracing::debug!(
                    command = cmd.name(),
                    message = %outcome.message,
                    "Command applied"
                );
                let mut notices = expired;
                notices.append(&mut outcome.notices);
                outcome.notices = notices;
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(command = cmd.name(), error = %e, "Command rejected");
                Err(e.into())
            }
        }
    }

    /// Drop expired notifications on every surface
    pub fn sweep(&mut self, now: i64) -> Vec<NoticeEvent> {
        let mut removed = Vec::new();
        for surface in Surface::ALL {
            if let Some(channel) = self.channels.get_mut(&surface) {
                removed.extend(
                    channel
                        .expire(now)
                        .into_iter()
                        .map(|id| NoticeEvent::Removed { surface, id }),
                );
            }
        }
        removed
    }

    // ========== Orders ==========

    /// Orders in arrival order
    pub fn orders(&self) -> &[KitchenOrder] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&KitchenOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Replace an order with the same id, or append a new one
    pub fn upsert_order(&mut self, order: KitchenOrder) {
        match self.orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => *slot = order,
            None => self.orders.push(order),
        }
    }

    pub fn order_filter(&self) -> &FilterCriteria {
        &self.order_filter
    }

    pub fn set_order_filter(&mut self, criteria: FilterCriteria) {
        self.order_filter = criteria;
    }

    pub fn visible_orders(&self) -> Vec<&KitchenOrder> {
        visible(&self.orders, &self.order_filter)
    }

    pub fn order_counts(&self) -> OrderCounts {
        let mut counts = OrderCounts::default();
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::InProgress => counts.in_progress += 1,
                OrderStatus::Ready => counts.ready += 1,
                OrderStatus::Delivered => counts.delivered += 1,
            }
        }
        counts
    }

    // ========== Tables ==========

    /// Tables by number
    pub fn tables(&self) -> impl Iterator<Item = &DiningTable> {
        self.tables.values()
    }

    pub fn table(&self, number: u32) -> Option<&DiningTable> {
        self.tables.get(&number)
    }

    pub fn upsert_table(&mut self, table: DiningTable) {
        self.tables.insert(table.number, table);
    }

    pub fn table_counts(&self) -> TableCounts {
        let mut counts = TableCounts::default();
        for table in self.tables.values() {
            match table.status() {
                TableStatus::Free => counts.free += 1,
                TableStatus::Occupied => counts.occupied += 1,
                TableStatus::Reserved => counts.reserved += 1,
            }
        }
        counts
    }

    pub fn default_party_size(&self) -> u32 {
        self.default_party_size
    }

    // ========== Users ==========

    /// Users in registration order
    pub fn users(&self) -> &[User] {
        self.users.list()
    }

    pub fn users_mut(&mut self) -> &mut UserRegistry {
        &mut self.users
    }

    pub fn user_filter(&self) -> &FilterCriteria {
        &self.user_filter
    }

    pub fn set_user_filter(&mut self, criteria: FilterCriteria) {
        self.user_filter = criteria;
    }

    pub fn visible_users(&self) -> Vec<&User> {
        visible(self.users.list(), &self.user_filter)
    }

    pub fn generated_password_len(&self) -> usize {
        self.generated_password_len
    }

    // ========== Notifications ==========

    /// Show a notification on `surface`; never fails
    pub fn raise(
        &mut self,
        surface: Surface,
        message: impl Into<String>,
        level: NotificationLevel,
        now: i64,
    ) -> Vec<NoticeEvent> {
        let Some(channel) = self.channels.get_mut(&surface) else {
            return Vec::new();
        };
        let delivery = channel.notify(message, level, now);

        let mut events: Vec<NoticeEvent> = delivery
            .superseded
            .into_iter()
            .map(|id| NoticeEvent::Removed { surface, id })
            .collect();
        events.push(NoticeEvent::Shown {
            surface,
            notification: delivery.notification,
        });
        events
    }

    /// Remove a notification before it expires
    pub fn dismiss_notification(
        &mut self,
        surface: Surface,
        id: NotificationId,
    ) -> Option<Notification> {
        self.channels.get_mut(&surface)?.dismiss(id)
    }

    /// Notifications visible on `surface` at `now`, oldest first
    pub fn notifications(&self, surface: Surface, now: i64) -> Vec<&Notification> {
        self.channels
            .get(&surface)
            .map(|channel| channel.visible(now))
            .unwrap_or_default()
    }

    /// Full read-only snapshot
    pub fn snapshot(&self, now: i64) -> BoardSnapshot {
        BoardSnapshot {
            orders: self.orders.clone(),
            visible_orders: self.visible_orders().into_iter().map(|o| o.id.clone()).collect(),
            order_counts: self.order_counts(),
            order_filter: self.order_filter.clone(),
            tables: self.tables.values().cloned().collect(),
            table_counts: self.table_counts(),
            users: self.users.list().to_vec(),
            visible_users: self.visible_users().into_iter().map(|u| u.id).collect(),
            user_filter: self.user_filter.clone(),
            notifications: Surface::ALL
                .into_iter()
                .map(|surface| SurfaceNotifications {
                    surface,
                    active: self.notifications(surface, now).into_iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

/// Kitchen board counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub ready: usize,
    pub delivered: usize,
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub free: usize,
    pub occupied: usize,
    pub reserved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceNotifications {
    pub surface: Surface,
    pub active: Vec<Notification>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub orders: Vec<KitchenOrder>,
    pub visible_orders: Vec<String>,
    pub order_counts: OrderCounts,
    pub order_filter: FilterCriteria,
    pub tables: Vec<DiningTable>,
    pub table_counts: TableCounts,
    pub users: Vec<User>,
    pub visible_users: Vec<i64>,
    pub user_filter: FilterCriteria,
    pub notifications: Vec<SurfaceNotifications>,
}
