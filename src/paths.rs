//! Centralized path definitions for trello
//!
//! ```text
//! ~/.config/trello/          # dirs::config_dir() on Linux
//! └── config.json            # API key, token, cached profile
//! ```
//!
//! `TRELLO_CONFIG_DIR` replaces the whole directory, which keeps tests and
//! alternate profiles away from the real config.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TRELLO_CONFIG_DIR";

/// Config directory name under the platform config directory
const APP_DIR: &str = "trello";

/// Config filename
const CONFIG_FILE: &str = "config.json";

/// Get the config directory.
///
/// Returns `None` when neither the override nor a platform config
/// directory is available.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(env::var_os(CONFIG_DIR_ENV).map(PathBuf::from), dirs::config_dir())
}

/// Get the config file path (`<config dir>/config.json`)
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| config_file_in(&dir))
}

/// Config file path inside a given directory
#[must_use]
pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

fn resolve_config_dir(override_dir: Option<PathBuf>, platform_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| platform_dir.map(|dir| dir.join(APP_DIR)))
}
