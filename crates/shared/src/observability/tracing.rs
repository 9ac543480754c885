//! 日志初始化
//!
//! 基于 tracing-subscriber，支持 JSON（结构化）与 pretty（人类可读）两种输出。

use anyhow::Result;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::ObservabilityConfig;

/// 构建环境过滤器
///
/// 优先使用 RUST_LOG，其次使用配置中的 log_level，都无效时回退到 info
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 是否使用 JSON 格式输出
pub fn is_json_format(config: &ObservabilityConfig) -> bool {
    config.log_format.eq_ignore_ascii_case("json")
}

/// 初始化 tracing 日志
///
/// 全局 subscriber 只能设置一次，重复调用返回错误
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let fmt_layer = if is_json_format(config) {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
