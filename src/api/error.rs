//! Request engine error types
//!
//! Every failure the engine can report falls into one of four closed kinds,
//! so callers (and tests) can branch on the kind instead of on message text.

use std::error::Error as StdError;

use thiserror::Error;

/// Error kinds reported by the request engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response was obtained (connect, timeout, body read)
    Transport,
    /// The API answered with a status code >= 400
    Api,
    /// A success payload did not match the expected shape
    Decode,
    /// A local check failed before any network call
    Validation,
}

impl ErrorKind {
    /// Get the error kind string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::Api => "API",
            Self::Decode => "DECODE",
            Self::Validation => "VALIDATION",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`Client`](super::Client) operations
#[derive(Debug, Error)]
pub enum Error {
    /// Network or timeout failure before a full response was read
    #[error("request failed: {}", describe(.0))]
    Transport(reqwest::Error),

    /// The API rejected the request
    #[error("HTTP {status}: {body}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Raw response text, verbatim
        body: String,
    },

    /// The response body does not match the expected resource shape
    #[error("decoding response: {0}")]
    Decode(serde_json::Error),

    /// Invalid input detected before a request was sent
    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Get the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// HTTP status code, for API failures
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The error followed by its causes, joined with `: `
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut cause = StdError::source(error);
    while let Some(err) = cause {
        let text = err.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = err.source();
    }
    message
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        // The URL carries the API token in its query string.
        Self::Transport(error.without_url())
    }
}
