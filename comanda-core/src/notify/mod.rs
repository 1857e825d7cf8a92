//! Notification channel
//!
//! Two delivery policies are kept side by side, chosen per surface:
//!
//! | Policy | Default surface | Duration |
//! |--------|-----------------|----------|
//! | single-slot | kitchen | 3000 ms |
//! | queued | dashboard, users | 5000 ms |
//!
//! Notifying never touches order, table or filter state.

mod channel;
mod timer;

pub use channel::{
    ChannelConfig, Delivery, DeliveryPolicy, NotificationChannel, QUEUED_DURATION_MS,
    SINGLE_SLOT_DURATION_MS, UnknownPolicy,
};
pub use timer::DismissTimers;
