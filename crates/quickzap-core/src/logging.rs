//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// The TUI owns the terminal, so logs go to a daily file under
/// `~/.local/share/quickzap/logs/`. Level is controlled by `QUICKZAP_LOG`.
///
/// # Examples
/// ```bash
/// QUICKZAP_LOG=debug quickzap
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "quickzap.log");

    let env_filter = EnvFilter::try_from_env("QUICKZAP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("quickzap=info,quickzap_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Quick Zap starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("quickzap").join("logs")
}
