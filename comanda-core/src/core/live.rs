//! Live driver - a [`Board`] behind a mutex plus real auto-dismiss timers
//!
//! Commands are serialized by the lock, so exactly one runs at a time.
//! Every notification shown arms a fire-once timer; every notification
//! removed (manual dismiss, single-slot supersession, sweep) cancels its
//! timer.

use std::sync::{Arc, Weak};
use std::time::Duration;

use shared::error::AppError;
use shared::intent::UiCommand;
use shared::message::{NotificationId, Surface};
use shared::util::now_millis;
use tokio::sync::Mutex;

use super::board::{Board, BoardSnapshot};
use crate::actions::{CommandOutcome, NoticeEvent};
use crate::notify::DismissTimers;

struct LiveState {
    board: Board,
    timers: DismissTimers,
}

#[derive(Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<LiveState>>,
}

impl SharedBoard {
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LiveState {
                board,
                timers: DismissTimers::new(),
            })),
        }
    }

    /// Apply one command and arm or cancel timers for its notices
    pub async fn dispatch(&self, cmd: &UiCommand) -> Result<CommandOutcome, AppError> {
        self.dispatch_at(cmd, now_millis()).await
    }

    /// Apply one command at `now` (epoch millis)
    ///
    /// Expired notifications lose their timers even when the command fails.
    pub async fn dispatch_at(&self, cmd: &UiCommand, now: i64) -> Result<CommandOutcome, AppError> {
        let mut state = self.inner.lock().await;
        let LiveState { board, timers } = &mut *state;
        for notice in board.sweep(now) {
            if let NoticeEvent::Removed { id, .. } = notice {
                timers.cancel(id);
            }
        }
        let outcome = board.dispatch_at(cmd, now)?;

        for notice in &outcome.notices {
            match notice {
                NoticeEvent::Shown {
                    surface,
                    notification,
                } => {
                    let after = Duration::from_millis(
                        (notification.expires_at - notification.created_at).max(0) as u64,
                    );
                    let fire = expire_later(Arc::downgrade(&self.inner), *surface, notification.id);
                    timers.arm(notification.id, after, fire);
                }
                NoticeEvent::Removed { id, .. } => {
                    timers.cancel(*id);
                }
            }
        }

        Ok(outcome)
    }

    /// Read the board under the lock
    pub async fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        let state = self.inner.lock().await;
        f(&state.board)
    }

    pub async fn snapshot(&self, now: i64) -> BoardSnapshot {
        self.with_board(|board| board.snapshot(now)).await
    }

    /// Number of timers still pending
    pub async fn armed_timers(&self) -> usize {
        self.inner.lock().await.timers.armed()
    }
}

/// Timer body: remove the notification once its display window is over
async fn expire_later(inner: Weak<Mutex<LiveState>>, surface: Surface, id: NotificationId) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut state = inner.lock().await;
    state.timers.forget(id);
    if state.board.dismiss_notification(surface, id).is_some() {
        tracing::debug!(%surface, notification_id = %id, "Notification auto-dismissed");
    }
}
