//! # Logging Module / 日志模块
//!
//! Installs the `tracing` subscriber. Logs go to standard error so that
//! standard output only ever carries report text.
//!
//! 安装 `tracing` 订阅器。日志写入标准错误，使标准输出只包含报告文本。

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes logging from `RUST_LOG`. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
