//! 通知消息类型定义
//!
//! Notification payloads shared between the state core and the UI layer.

pub mod payload;
pub use payload::*;
