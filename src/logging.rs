use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Stdout filter for the web server.
pub const SERVE_STDOUT_FILTER: &str = "info,web_request=info,snapshot=info,hyper=warn";
/// Stdout filter for the console viewer, which prints its own output.
pub const VIEW_STDOUT_FILTER: &str = "warn";

/// Daily-rolling `polmap.log.<date>` in `log_dir`. Fails instead of panicking
/// when the directory cannot be created.
pub fn file_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("polmap.log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log directory {}", log_dir.display()))
}

/// Install the stdout and daily-rolling file layers. `RUST_LOG` overrides the
/// stdout directives.
pub fn configure_logging(log_dir: &Path, stdout_directives: &str) -> Result<()> {
    let stdout_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(stdout_directives));

    // Stdout log configuration
    let stdout_log = fmt::layer()
        .with_writer(io::stdout)
        .with_filter(stdout_filter);

    // File log configuration
    let file_log = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender(log_dir)?)
        .with_filter(EnvFilter::new("info,web_request=debug,snapshot=debug,hyper=info"));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_file_appender_creates_log_dir() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        assert!(file_appender(&log_dir).is_ok());
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_file_appender_unusable_dir_is_error() {
        // A regular file where the directory should be.
        let file = NamedTempFile::new().unwrap();
        let log_dir = file.path().join("logs");

        assert!(file_appender(&log_dir).is_err());
    }
}
