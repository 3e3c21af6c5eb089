/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type for the Finnhub client
//!
//! Every operation returns [`AppError`]. Variants fall into three groups,
//! reported by [`AppError::kind`]:
//!
//! - [`ErrorKind::Transport`]: the request never produced a usable response
//! - [`ErrorKind::Decode`]: the response arrived but its body did not match the model
//! - [`ErrorKind::InvalidArgument`]: the call was rejected before any request was sent

use reqwest::StatusCode;
use std::fmt;

/// Coarse classification of an [`AppError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection, timeout or non-success HTTP status
    Transport,
    /// Malformed JSON or schema mismatch
    Decode,
    /// Argument rejected locally, no request issued
    InvalidArgument,
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Network error from reqwest, with the request URL stripped
    Network(reqwest::Error),
    /// JSON decoding error
    Json(serde_json::Error),
    /// The API rejected the token
    Unauthorized,
    /// The API answered 429 Too Many Requests
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// Exchange key not present in the exchange table
    UnknownExchange(String),
    /// Invalid argument or configuration value
    InvalidInput(String),
}

impl AppError {
    /// Returns the kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_)
            | AppError::Unauthorized
            | AppError::RateLimitExceeded
            | AppError::Unexpected(_) => ErrorKind::Transport,
            AppError::Json(_) => ErrorKind::Decode,
            AppError::UnknownExchange(_) | AppError::InvalidInput(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }

    /// True when the request failed before a usable response arrived
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// True when the response body could not be decoded
    #[must_use]
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// True when the call was rejected before any request was sent
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::UnknownExchange(name) => write!(f, "unknown exchange: {name}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

// reqwest embeds the full URL in its errors, token included
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.without_url())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}
