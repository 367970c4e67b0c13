use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("userql={level},tower_http={level}")
}

/// Create the log directory and a daily-rotated appender inside it.
pub fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let prefix = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("userql.log");

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)?;
    Ok(appender)
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Fails without installing a subscriber when the log file cannot be opened.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let appender = log_file.as_deref().map(file_appender).transpose()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(appender) = appender {
        let file_layer = fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(false), "userql=info,tower_http=info");
        assert_eq!(default_directive(true), "userql=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_file_appender_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs").join("nested");

        file_appender(&log_dir.join("userql.log")).unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_file_appender_reports_unusable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        assert!(file_appender(&blocker.join("userql.log")).is_err());
    }

    #[test]
    fn test_init_with_bad_log_file_fails_before_installing() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        assert!(init(false, Some(blocker.join("userql.log"))).is_err());
    }
}
