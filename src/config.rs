//! Persisted user configuration
//!
//! Stores the API key and token saved by `trello auth setup`, together with
//! the profile of the member they belong to. The file lives at
//! [`paths::config_file`] as pretty-printed JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::Credentials;
use crate::paths;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "TRELLO_API_KEY";

/// Environment variable holding the API token
pub const API_TOKEN_ENV: &str = "TRELLO_API_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TRELLO_API_URL";

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading, writing or removing the file failed
    #[error("{}: {error}", .path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        error: io::Error,
    },

    /// The file is not valid config JSON
    #[error("parsing {}: {error}", .path.display())]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        error: serde_json::Error,
    },

    /// The config could not be serialized
    #[error("encoding config: {0}")]
    Encode(serde_json::Error),

    /// No config directory could be determined
    #[error("cannot determine the config directory; set {}", paths::CONFIG_DIR_ENV)]
    NoConfigDir,
}

/// Saved credentials and the profile they authenticate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// API token
    #[serde(default)]
    pub api_token: String,
    /// ID of the authenticated member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Full name of the authenticated member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Username of the authenticated member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf, ConfigError> {
        paths::config_file().ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file. A missing file yields the empty default.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load a config file from `path`. A missing file yields the empty default.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    error,
                });
            },
        };

        serde_json::from_str(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Save to the config file, returning its path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to `path`, creating the parent directory. The file is readable
    /// by the owner only.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            create_private_dir(dir)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Encode)?;
        write_private_file(path, &content).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Remove the config file, returning its path. A missing file is not
    /// an error.
    pub fn clear() -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        Self::clear_at(&path)?;
        Ok(path)
    }

    /// Remove the config file at `path`. A missing file is not an error.
    pub fn clear_at(path: &Path) -> Result<(), ConfigError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                error,
            }),
        }
    }

    /// Whether both a key and a token are saved
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.api_token.is_empty()
    }
}

/// Where the credentials in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `TRELLO_API_KEY` and `TRELLO_API_TOKEN`
    Env,
    /// The saved config file
    ConfigFile,
}

impl CredentialSource {
    /// Human-readable description
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env vars",
            Self::ConfigFile => "config file",
        }
    }
}

/// Pick the credentials to use.
///
/// The environment wins when both variables are non-empty, then the config
/// file when it holds both values. `env` looks up a variable by name.
pub fn resolve_credentials<F>(env: F, config: &Config) -> Option<(Credentials, CredentialSource)>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| env(name).filter(|v| !v.is_empty());

    if let (Some(key), Some(token)) = (non_empty(API_KEY_ENV), non_empty(API_TOKEN_ENV)) {
        return Some((Credentials::new(key, token), CredentialSource::Env));
    }

    config.has_credentials().then(|| {
        (
            Credentials::new(config.api_key.as_str(), config.api_token.as_str()),
            CredentialSource::ConfigFile,
        )
    })
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
        .map_err(|error| ConfigError::Io {
            path: dir.to_path_buf(),
            error,
        })
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(dir).map_err(|error| ConfigError::Io {
        path: dir.to_path_buf(),
        error,
    })
}

#[cfg(unix)]
fn write_private_file(path: &Path, content: &str) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}
