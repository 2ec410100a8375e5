//! 统一配置中心
//!
//! 提供注册服务的全局配置，目前包括：
//! - 日志与追踪
//!
//! 加载优先级：默认值 -> 可选配置文件（`SIGNUP_CONFIG_FILE`）-> 环境变量（`SIGNUP_*`）

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 指定配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "SIGNUP_CONFIG_FILE";

/// 环境变量前缀，嵌套字段以 `__` 分隔，例如 `SIGNUP_TELEMETRY__FILTER`
pub const ENV_PREFIX: &str = "SIGNUP_";

/// 全局应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Pretty,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TelemetryConfig {
    /// `EnvFilter` 指令，例如 `info` 或 `presentation=debug`
    #[validate(length(min = 1))]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
    /// 是否输出事件的 target
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_with_target() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

impl AppConfig {
    /// 按优先级加载并校验配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut fig = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            if path.ends_with(".yml") || path.ends_with(".yaml") {
                fig = fig.merge(Yaml::file(path));
            } else if path.ends_with(".json") {
                fig = fig.merge(Json::file(path));
            } else {
                fig = fig.merge(Toml::file(path));
            }
        }
        fig = fig.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::extract(fig)
    }

    /// 从 TOML/YAML/JSON 字符串解析配置，按简单规则自动识别格式
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let defaults = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        let trimmed = s.trim_start();
        let fig = if trimmed.starts_with('{') {
            defaults.merge(Json::string(s))
        } else if looks_like_toml(s) {
            defaults.merge(Toml::string(s))
        } else {
            defaults.merge(Yaml::string(s))
        };

        Self::extract(fig)
    }

    fn extract(fig: Figment) -> Result<Self, ConfigError> {
        let cfg: AppConfig = fig.extract().map_err(Box::new)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// 存在 `[table]` 表头或 `key = value` 行时按 TOML 处理
///
/// 只看 `=` 左侧是否为裸键，YAML 值里的 `presentation=debug` 不会被误判。
fn looks_like_toml(s: &str) -> bool {
    s.lines().map(str::trim).any(|line| {
        if line.starts_with('[') {
            return true;
        }
        match line.split_once('=') {
            Some((key, _)) => {
                let key = key.trim_end();
                !key.is_empty()
                    && key
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '"'))
            }
            None => false,
        }
    })
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] Box<figment::Error>),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
