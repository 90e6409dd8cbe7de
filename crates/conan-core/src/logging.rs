//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "CCBROWSE_LOG";

/// Filter used when `CCBROWSE_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "conan_center_browser=info,conan_app=info,conan_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/conan-center-browser/logs/`
/// (platform data dir). Log level is controlled by `CCBROWSE_LOG`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
///
/// # Examples
/// ```bash
/// CCBROWSE_LOG=debug ccbrowse zlib
/// CCBROWSE_LOG=conan_app=trace ccbrowse zlib
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ccbrowse.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("ConanCenter browser starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("conan-center-browser").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("ccbrowse.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for target in ["conan_center_browser=info", "conan_app=info", "conan_tui=info"] {
            assert!(DEFAULT_LOG_FILTER.contains(target));
        }
        assert!(DEFAULT_LOG_FILTER.ends_with(",warn"));
    }

    #[test]
    fn test_log_file_lives_under_app_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("conan-center-browser/logs/ccbrowse.log"));
    }
}
