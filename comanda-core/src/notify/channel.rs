//! Per-surface notification channel
//!
//! Pure bookkeeping against an explicit clock (epoch millis). Real timers
//! live in [`super::timer`]; the channel itself never sleeps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::message::{Notification, NotificationId, NotificationLevel};

/// Visible duration of the single-slot (kitchen) variant
pub const SINGLE_SLOT_DURATION_MS: i64 = 3_000;
/// Visible duration of the queued (dashboard, users) variant
pub const QUEUED_DURATION_MS: i64 = 5_000;

/// How a new notification interacts with the ones already showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// At most one visible; a new one removes the current one
    SingleSlot,
    /// Stacked; every entry expires on its own
    Queued,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delivery policy: {0} (expected `single` or `queued`)")]
pub struct UnknownPolicy(pub String);

impl FromStr for DeliveryPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_slot" | "single-slot" => Ok(Self::SingleSlot),
            "queued" | "queue" | "stacked" => Ok(Self::Queued),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Policy and display duration for one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub policy: DeliveryPolicy,
    pub duration_ms: i64,
}

impl ChannelConfig {
    pub const fn single_slot() -> Self {
        Self {
            policy: DeliveryPolicy::SingleSlot,
            duration_ms: SINGLE_SLOT_DURATION_MS,
        }
    }

    pub const fn queued() -> Self {
        Self {
            policy: DeliveryPolicy::Queued,
            duration_ms: QUEUED_DURATION_MS,
        }
    }
}

/// Result of a `notify` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub notification: Notification,
    /// Entries removed to make room (single-slot only)
    pub superseded: Vec<NotificationId>,
}

#[derive(Debug, Clone)]
pub struct NotificationChannel {
    config: ChannelConfig,
    entries: Vec<Notification>,
}

impl NotificationChannel {
    pub fn new(config: ChannelConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> ChannelConfig {
        self.config
    }

    /// Show a message. Never fails and never blocks.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        level: NotificationLevel,
        now: i64,
    ) -> Delivery {
        let superseded = match self.config.policy {
            DeliveryPolicy::SingleSlot => self.entries.drain(..).map(|n| n.id).collect(),
            DeliveryPolicy::Queued => Vec::new(),
        };

        let notification = Notification::new(message, level, now, self.config.duration_ms);
        self.entries.push(notification.clone());

        Delivery {
            notification,
            superseded,
        }
    }

    /// Remove an entry before it expires
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.entries.iter().position(|n| n.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Drop every entry whose display window has elapsed at `now`
    pub fn expire(&mut self, now: i64) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.entries.retain(|n| {
            if n.is_visible_at(now) {
                true
            } else {
                expired.push(n.id);
                false
            }
        });
        expired
    }

    /// Entries visible at `now`, oldest first
    pub fn visible(&self, now: i64) -> Vec<&Notification> {
        self.entries.iter().filter(|n| n.is_visible_at(now)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
