//! Configuration file reading and writing.
//!
//! # File Formats
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./tareas.json5` or `./tareas.json`
//! 2. User: `~/.config/tareas/config.json5` or `~/.config/tareas/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for in the working directory.
const CONFIG_FILE_NAMES: &[&str] = &["tareas.json5", "tareas.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "tareas";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first candidate that exists.
///
/// # Examples
///
/// ```no_run
/// use tareas_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir`, then `<user_dir>/tareas/`.
fn find_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Parses configuration text. The JSON5 parser also accepts plain JSON.
fn parse<T: serde::de::DeserializeOwned>(content: &str) -> Result<T> {
    serde_json5::from_str(content).map_err(ConfigError::from)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
///
/// # Examples
///
/// ```no_run
/// use tareas_config::persistence::read_config_file;
/// use tareas_config::Config;
///
/// # fn main() -> tareas_config::Result<()> {
/// let config: Config = read_config_file("tareas.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content)
}

/// Async variant of [`read_config_file`] for use inside the runtime.
///
/// # Errors
///
/// Same as [`read_config_file`].
pub async fn read_config_file_async<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse(&content)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written, or the
/// configuration cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
