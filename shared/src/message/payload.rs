use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==================== Notification Level ====================

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// 普通信息
    #[default]
    Info,
    /// 操作成功
    Success,
    /// 警告
    Warning,
    /// 错误
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ==================== Surface ====================

/// UI surface that owns a notification area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Kitchen display board
    Kitchen,
    /// Dashboard / tables
    Dashboard,
    /// User registration and listing
    Users,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Kitchen, Surface::Dashboard, Surface::Users];
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kitchen => write!(f, "kitchen"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Users => write!(f, "users"),
        }
    }
}

// ==================== Notification ====================

/// Notification identifier
pub type NotificationId = Uuid;

/// 通知载荷 - short-lived message shown on one surface
///
/// Exists only in the presentation state, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub level: NotificationLevel,
    /// Epoch millis
    pub created_at: i64,
    /// Epoch millis after which the notification is no longer visible
    pub expires_at: i64,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        level: NotificationLevel,
        created_at: i64,
        duration_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
            created_at,
            expires_at: created_at + duration_ms,
        }
    }

    /// Visible at `now` unless its display window has elapsed
    pub fn is_visible_at(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serde() {
        let json = serde_json::to_string(&NotificationLevel::Success).unwrap();
        assert_eq!(json, "\"success\"");
        let level: NotificationLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, NotificationLevel::Warning);
    }

    #[test]
    fn test_visibility_window() {
        let n = Notification::new("Order #42 is ready", NotificationLevel::Success, 1_000, 3_000);
        assert!(n.is_visible_at(1_000));
        assert!(n.is_visible_at(3_999));
        assert!(!n.is_visible_at(4_000));
    }

    #[test]
    fn test_surface_serde() {
        let surface: Surface = serde_json::from_str("\"dashboard\"").unwrap();
        assert_eq!(surface, Surface::Dashboard);
    }
}
