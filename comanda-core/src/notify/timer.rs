//! Auto-dismiss timers
//!
//! One fire-once task per visible notification. Each task races its sleep
//! against a [`CancellationToken`]; cancelling the token (manual dismiss,
//! single-slot supersession) guarantees the callback never runs.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use shared::message::NotificationId;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct DismissTimers {
    tokens: HashMap<NotificationId, CancellationToken>,
}

impl DismissTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `on_fire` after `after` unless cancelled first.
    ///
    /// Must be called from within a tokio runtime. Re-arming an id cancels
    /// the previous timer for it.
    pub fn arm<F>(&mut self, id: NotificationId, after: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::trace!(notification_id = %id, "Dismiss timer cancelled");
                }
                _ = tokio::time::sleep(after) => on_fire.await,
            }
        });

        if let Some(previous) = self.tokens.insert(id, token) {
            previous.cancel();
        }
    }

    /// Cancel a pending timer. Returns false if none was armed.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        match self.tokens.remove(&id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Drop bookkeeping for a timer that already fired
    pub fn forget(&mut self, id: NotificationId) {
        self.tokens.remove(&id);
    }

    pub fn armed(&self) -> usize {
        self.tokens.len()
    }

    pub fn cancel_all(&mut self) {
        for (_, token) in self.tokens.drain() {
            token.cancel();
        }
    }
}

impl Drop for DismissTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_duration() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timers = DismissTimers::new();

        let counter = fired.clone();
        timers.arm(Uuid::new_v4(), Duration::from_millis(3_000), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(2_999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timers = DismissTimers::new();
        let id = Uuid::new_v4();

        let counter = fired.clone();
        timers.arm(id, Duration::from_millis(5_000), async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(timers.armed(), 1);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.armed(), 0);

        tokio::time::sleep(Duration::from_millis(6_000)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
