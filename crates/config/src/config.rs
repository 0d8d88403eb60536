//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tareas application.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, read_config_file_async, write_config_file};
use crate::view::StartView;

/// The main configuration struct for the tareas application.
///
/// # Examples
///
/// ```
/// use tareas_config::{Config, LoggingConfig, StartView};
///
/// let config = Config::default();
/// assert_eq!(config.view, StartView::Board);
/// assert!(config.mouse);
///
/// let config = Config {
///     view: StartView::List,
///     demo: true,
///     mouse: false,
///     logging: LoggingConfig::to_directory("/tmp/tareas", "debug"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The screen shown at startup.
    #[serde(default)]
    pub view: StartView,

    /// Seed the board and the list with sample entries.
    #[serde(default)]
    pub demo: bool,

    /// Capture the mouse so cards can be clicked and dragged.
    #[serde(default = "default_mouse")]
    pub mouse: bool,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: StartView::default(),
            demo: false,
            mouse: default_mouse(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// See [`crate::persistence`] for the search order. If no configuration
    /// file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tareas_config::Config;
    ///
    /// # async fn example() -> tareas_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Starting on the {} view", config.view.display_name());
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                let config: Config = read_config_file_async(&path).await?;
                config.validate()?;
                Ok(config)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the logging section is invalid.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}
