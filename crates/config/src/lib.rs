//! Configuration management for the tareas application.
//!
//! This crate handles loading, validating, and persisting configuration
//! files.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`view`]: The screen shown at startup
//! - [`logging`]: Log level and log file location
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./tareas.json5` or `./tareas.json`)
//! 2. User config (`~/.config/tareas/config.json5` or `~/.config/tareas/config.json`)
//! 3. Built-in defaults
//!
//! The first file found wins; files are not merged.
//!
//! # Format
//!
//! ```json5
//! {
//!   view: "board",     // or "list"
//!   demo: false,       // seed sample entries
//!   mouse: true,       // click and drag cards
//!   logging: { level: "info", directory: "/tmp/tareas-logs" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use tareas_config::Config;
//!
//! # async fn example() -> tareas_config::Result<()> {
//! let config = Config::load().await?;
//! if let Some(file) = config.logging.log_file() {
//!     println!("Logging to {}", file.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod view;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use view::StartView;
