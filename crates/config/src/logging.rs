//! Logging configuration.
//!
//! The terminal UI owns stdout, so log output only goes to files. When no
//! directory is configured, logs are discarded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Level names accepted in `logging.level`, from most to least verbose.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name used inside the log directory.
pub const LOG_FILE_NAME: &str = "tareas.log";

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use tareas_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.log_file().is_none());
///
/// let config = LoggingConfig::to_directory("/tmp/tareas", "debug");
/// assert!(config.log_file().unwrap().ends_with("tareas.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level that is written.
    ///
    /// `RUST_LOG`, when set, takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory the log file is written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration that writes to `directory` at `level`.
    #[must_use]
    pub fn to_directory(directory: impl Into<PathBuf>, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            directory: Some(directory.into()),
        }
    }

    /// Returns the full path of the log file, if logging to disk.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(|dir| dir.join(LOG_FILE_NAME))
    }

    /// Validates the level name and the directory.
    ///
    /// Level names are matched case-insensitively. A directory that does
    /// not exist yet is fine; it is created when logging starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unknown level and
    /// [`ConfigError::InvalidLogDirectory`] when the path points at a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use tareas_config::LoggingConfig;
    ///
    /// let mut config = LoggingConfig::default();
    /// config.level = "WARN".to_string();
    /// assert!(config.validate().is_ok());
    ///
    /// config.level = "loud".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.level.clone()));
        }

        if let Some(dir) = self.directory.as_deref().filter(|d| is_file(d)) {
            return Err(ConfigError::InvalidLogDirectory(dir.to_path_buf()));
        }

        Ok(())
    }
}

fn is_file(path: &Path) -> bool {
    path.exists() && !path.is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_discards_logs() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert!(config.directory.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn every_known_level_validates() {
        for level in LOG_LEVELS {
            let config = LoggingConfig {
                level: (*level).to_string(),
                directory: None,
            };
            assert!(config.validate().is_ok(), "{level} should be accepted");
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            directory: None,
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "verbose"));
    }

    #[test]
    fn file_as_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();

        let config = LoggingConfig::to_directory(&file, "info");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogDirectory(_))
        ));
    }

    #[test]
    fn missing_directory_is_accepted() {
        let dir = TempDir::new().unwrap();
        let config = LoggingConfig::to_directory(dir.path().join("later"), "debug");
        assert!(config.validate().is_ok());
        assert_eq!(
            config.log_file(),
            Some(dir.path().join("later").join(LOG_FILE_NAME))
        );
    }

    #[test]
    fn directory_not_serialized_when_none() {
        let json = serde_json::to_string(&LoggingConfig::default()).unwrap();
        assert_eq!(json, r#"{"level":"info"}"#);
    }
}
