//! API key and token pair attached to every request

use std::fmt;

use super::Params;

/// Query parameter carrying the API key
pub const KEY_PARAM: &str = "key";

/// Query parameter carrying the API token
pub const TOKEN_PARAM: &str = "token";

/// Trello API credentials. Debug output never shows the values.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    token: String,
}

impl Credentials {
    /// Create credentials from an API key and token
    #[must_use]
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }

    /// The API key
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The API token
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Authentication parameters, the first source of every request's query
    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .set(KEY_PARAM, self.key.as_str())
            .set(TOKEN_PARAM, self.token.as_str())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
