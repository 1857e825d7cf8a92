//! 核心模块 - 配置、状态、错误定义
//!
//! - [`Config`] - 看板配置
//! - [`Board`] - 会话状态
//! - [`SharedBoard`] - 带定时器的运行时封装
//! - [`BoardError`] - 命令错误

pub mod board;
pub mod config;
pub mod error;
pub mod live;
pub mod seed;

pub use board::{Board, BoardSnapshot, OrderCounts, SurfaceNotifications, TableCounts};
pub use config::Config;
pub use error::BoardError;
pub use live::SharedBoard;
pub use seed::{BoardSeed, load_seed};
