//! Error types shared by the fetcher, the parser and the token handlers.

use std::io;

use thiserror::Error;

/// Failure to retrieve raw token bytes from a locator.
///
/// Access and xapi token handlers treat every variant as "no token available".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local file (or `file://` resource) does not exist.
    #[error("token resource '{0}' not found")]
    NotFound(String),

    /// Resource exists but could not be read or reached.
    #[error("token resource '{locator}' unreachable: {reason}")]
    Unreachable { locator: String, reason: String },

    /// Remote endpoint answered with a non-success status.
    #[error("token resource '{locator}' answered with status {status}")]
    Status { locator: String, status: u16 },

    /// Scheme the fetcher does not know how to handle.
    #[error("unsupported token locator '{0}'")]
    UnsupportedLocator(String),
}

/// Fatal failures raised from a handler's `config()`.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Fetched content lacks the required structure.
    #[error("invalid token from '{locator}': {reason}")]
    InvalidToken { locator: String, reason: String },

    /// Local credential file could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TokenError {
    pub fn invalid(locator: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenError::InvalidToken {
            locator: locator.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_token(&self) -> bool {
        matches!(self, TokenError::InvalidToken { .. })
    }
}
