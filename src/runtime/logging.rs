//! 日志初始化

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::errors::{JCourseError, Result};

/// 构建日志过滤器；无法解析的级别回退到 `info`
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log level '{}': {e}, falling back to info",
            config.app.log_level
        );
        EnvFilter::new("info")
    })
}

/// 初始化全局日志订阅器
///
/// 开发环境输出带文件与行号的彩色文本，其它环境输出 JSON。
/// 返回的 guard 需要在进程生命周期内持有，否则缓冲日志会丢失。
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    let installed = if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        tracing_builder.json().try_init()
    };

    installed.map_err(|e| JCourseError::configuration(format!("日志初始化失败: {e}")))?;

    tracing::debug!(
        system = %config.app.system_name,
        environment = %config.app.environment,
        "Logging initialized"
    );

    Ok(guard)
}
