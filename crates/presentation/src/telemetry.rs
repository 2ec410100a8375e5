//! 日志初始化

use config::{LogFormat, TelemetryConfig};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter `{directive}`: {message}")]
    Filter { directive: String, message: String },
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// 解析 `EnvFilter` 指令
pub fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Filter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// 安装全局 tracing subscriber，`RUST_LOG` 优先于配置中的指令
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.filter)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}
