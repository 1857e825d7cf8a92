use shared::message::Surface;

use crate::notify::{ChannelConfig, DeliveryPolicy, QUEUED_DURATION_MS, SINGLE_SLOT_DURATION_MS};

/// 看板配置 - 所有配置项都可以通过环境变量覆盖
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | - | 日志目录 (未设置时输出到 stderr) |
/// | DEFAULT_PARTY_SIZE | 2 | 入座默认人数 |
/// | KITCHEN_NOTICE_MS | 3000 | 厨房通知显示时长 |
/// | KITCHEN_NOTICE_POLICY | single | 厨房通知策略 |
/// | DASHBOARD_NOTICE_MS | 5000 | 桌台通知显示时长 |
/// | DASHBOARD_NOTICE_POLICY | queued | 桌台通知策略 |
/// | USERS_NOTICE_MS | 5000 | 用户页通知显示时长 |
/// | USERS_NOTICE_POLICY | queued | 用户页通知策略 |
/// | GENERATED_PASSWORD_LEN | 12 | 生成密码长度 |
///
/// # 示例
///
/// ```ignore
/// KITCHEN_NOTICE_MS=5000 LOG_LEVEL=debug comanda seed.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Party size recorded by occupy and confirm-arrival
    pub default_party_size: u32,
    pub kitchen: ChannelConfig,
    pub dashboard: ChannelConfig,
    pub users: ChannelConfig,
    pub generated_password_len: usize,
    /// 解析失败、已回退默认值的配置项 (日志初始化后输出)
    pub warnings: Vec<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let mut warnings = Vec::new();
        let kitchen = channel_from_env("KITCHEN", ChannelConfig::single_slot(), &mut warnings);
        let dashboard = channel_from_env("DASHBOARD", ChannelConfig::queued(), &mut warnings);
        let users = channel_from_env("USERS", ChannelConfig::queued(), &mut warnings);

        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            default_party_size: std::env::var("DEFAULT_PARTY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(2),
            kitchen,
            dashboard,
            users,
            generated_password_len: std::env::var("GENERATED_PASSWORD_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            warnings,
        }
    }

    /// Channel settings for one surface
    pub fn channel(&self, surface: Surface) -> ChannelConfig {
        match surface {
            Surface::Kitchen => self.kitchen,
            Surface::Dashboard => self.dashboard,
            Surface::Users => self.users,
        }
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            default_party_size: 2,
            kitchen: ChannelConfig::single_slot(),
            dashboard: ChannelConfig::queued(),
            users: ChannelConfig::queued(),
            generated_password_len: 12,
            warnings: Vec::new(),
        }
    }
}

fn channel_from_env(
    prefix: &str,
    default: ChannelConfig,
    warnings: &mut Vec<String>,
) -> ChannelConfig {
    let policy = match std::env::var(format!("{prefix}_NOTICE_POLICY")) {
        Ok(raw) => raw.parse::<DeliveryPolicy>().unwrap_or_else(|e| {
            warnings.push(format!("{prefix}_NOTICE_POLICY: {e}, using {:?}", default.policy));
            default.policy
        }),
        Err(_) => default.policy,
    };
    let duration_ms = std::env::var(format!("{prefix}_NOTICE_MS"))
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(match policy {
            DeliveryPolicy::SingleSlot => SINGLE_SLOT_DURATION_MS,
            DeliveryPolicy::Queued => QUEUED_DURATION_MS,
        });
    ChannelConfig { policy, duration_ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channels() {
        let config = Config::default();
        assert_eq!(config.channel(Surface::Kitchen), ChannelConfig::single_slot());
        assert_eq!(config.channel(Surface::Dashboard).duration_ms, 5_000);
        assert_eq!(config.channel(Surface::Users).policy, DeliveryPolicy::Queued);
        assert_eq!(config.default_party_size, 2);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_bad_policy_is_collected() {
        // SAFETY: the variable name is unique to this test
        unsafe { std::env::set_var("CONFIG_TEST_NOTICE_POLICY", "sideways") };
        let mut warnings = Vec::new();
        let channel = channel_from_env("CONFIG_TEST", ChannelConfig::queued(), &mut warnings);
        assert_eq!(channel, ChannelConfig::queued());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("CONFIG_TEST_NOTICE_POLICY"));
    }
}
