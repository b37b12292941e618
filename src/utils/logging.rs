//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<data dir>/showcase.log`.
//! The previous sessions' logs are shifted on startup, keeping 9 of them.

use crate::error::{Result, ShowcaseError, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (showcase.log.1 through showcase.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system writing into `log_dir`
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join("showcase.log");
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, per session, so the appender never rolls
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("showcase")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| ShowcaseError::Config(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ShowcaseError::Config(Box::new(e)))?;

    tracing::info!("Showcase v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `showcase.log` -> `.1` -> `.2` ... dropping `.9`
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| ShowcaseError::Config(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| ShowcaseError::Config(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            std::fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotate_without_existing_log() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("showcase.log");

        rotate_logs_on_startup(&log_path).unwrap();
        assert!(!temp_dir.path().join("showcase.log.1").exists());
    }

    #[test]
    fn test_rotate_keeps_most_recent_sessions() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("showcase.log");

        for session in 1..=12 {
            fs::write(&log_path, format!("session {session}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        assert!(!log_path.exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("showcase.log.1")).unwrap(),
            "session 12"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("showcase.log.9")).unwrap(),
            "session 4"
        );
        assert!(!temp_dir.path().join("showcase.log.10").exists());
    }
}
