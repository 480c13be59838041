//! Error types for the hydra client
//!
//! Every failure layer of a control-plane exchange maps to its own variant:
//! the HTTP transport, request encoding, response decoding and the expected
//! shape of token responses. Nothing is logged-and-swallowed; callers always
//! receive the error value.

use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The HTTP exchange failed (connection refused, DNS failure, timeout, body read)
    Transport(reqwest::Error),
    /// The request body could not be serialized to JSON
    Encoding(serde_json::Error),
    /// The response body was not a JSON object; the raw payload is kept for diagnostics
    Decoding {
        /// Underlying JSON parse error
        source: serde_json::Error,
        /// Raw response payload as received
        raw: String,
    },
    /// An expected response field was absent
    MissingField(&'static str),
    /// An expected response field was present but not a string
    InvalidFieldType(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Encoding(e) => write!(f, "encoding error: {e}"),
            AppError::Decoding { source, raw } => {
                write!(f, "decoding error: {source} (raw response: {raw})")
            }
            AppError::MissingField(field) => write!(f, "missing field `{field}` in response"),
            AppError::InvalidFieldType(field) => {
                write!(f, "field `{field}` in response is not a string")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Encoding(e) => Some(e),
            AppError::Decoding { source, .. } => Some(source),
            AppError::MissingField(_) | AppError::InvalidFieldType(_) => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err)
    }
}
