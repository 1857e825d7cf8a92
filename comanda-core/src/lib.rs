//! Comanda core - 餐厅看板状态核心
//!
//! # 架构概述
//!
//! UI clicks arrive as [`UiCommand`]s. Each command is turned into a
//! [`actions::CommandAction`], validated and applied to the [`Board`], and
//! its notification side effects are reported back. [`ViewSync`] projects
//! the resulting state onto render models.
//!
//! # 模块结构
//!
//! ```text
//! comanda-core/src/
//! ├── core/      # 配置、状态、错误、实时驱动
//! ├── actions/   # 命令处理器 (one file per command)
//! ├── status/    # 订单 / 桌台状态机
//! ├── filter/    # 过滤引擎
//! ├── notify/    # 通知通道与定时器
//! ├── users/     # 用户注册、密码
//! ├── view/      # 视图投影
//! └── utils/     # 日志、校验
//! ```

pub mod actions;
pub mod core;
pub mod filter;
pub mod notify;
pub mod status;
pub mod users;
pub mod utils;
pub mod view;

// Re-export 公共类型
pub use actions::{CommandOutcome, NoticeEvent, OutcomeDetail};
pub use core::{Board, BoardError, BoardSeed, BoardSnapshot, Config, SharedBoard, load_seed};
pub use filter::{FilterCriteria, Filterable, is_visible};
pub use notify::{DeliveryPolicy, NotificationChannel};
pub use shared::intent::UiCommand;
pub use status::{StatusError, advance_order, advance_table};
pub use utils::{AppError, AppResult, CommandResponse, ErrorCode};
pub use view::{ViewPatch, ViewSync};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read [`Config`] and start logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    for warning in &config.warnings {
        tracing::warn!(%warning, "Config value ignored");
    }
    tracing::debug!(environment = %config.environment, "Environment ready");
    config
}
