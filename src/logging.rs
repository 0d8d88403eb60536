//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output only ever goes to a file.
//! Without a configured directory nothing is recorded.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tareas_config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are kept by the default filter.
const CRATES: &[&str] = &["tareas", "tareas_board", "tareas_config", "tareas_tui"];

/// Builds the filter directives used when `RUST_LOG` is not set.
fn default_directives(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits the configured log file into its directory and file name.
fn log_target(config: &LoggingConfig) -> Option<(PathBuf, OsString)> {
    let path = config.log_file()?;
    let file_name = path.file_name()?.to_os_string();
    let directory = path.parent()?.to_path_buf();
    Some((directory, file_name))
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. The returned
/// guard flushes pending lines when dropped and must outlive the
/// application.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let Some((directory, file_name)) = log_target(config) else {
        return Ok(None);
    };

    std::fs::create_dir_all(&directory).with_context(|| {
        format!("could not create log directory {}", directory.display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let file_appender = tracing_appender::rolling::never(&directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("could not install the tracing subscriber")?;

    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        let directives = default_directives("WARN");
        assert_eq!(
            directives,
            "tareas=warn,tareas_board=warn,tareas_config=warn,tareas_tui=warn"
        );
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn target_follows_the_configured_log_file() {
        let config = LoggingConfig::to_directory("/var/tmp/tareas", "info");
        let (directory, file_name) = log_target(&config).unwrap();
        assert_eq!(directory, PathBuf::from("/var/tmp/tareas"));
        assert_eq!(file_name, OsString::from("tareas.log"));
        assert_eq!(config.log_file(), Some(directory.join(file_name)));
    }

    #[test]
    fn no_directory_means_no_logging() {
        assert!(log_target(&LoggingConfig::default()).is_none());
        let guard = init(&LoggingConfig::default()).unwrap();
        assert!(guard.is_none());
    }
}
