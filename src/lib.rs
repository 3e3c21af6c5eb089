/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Finnhub Client
//!
//! An async client for the [Finnhub](https://finnhub.io) stock market REST API.
//!
//! The client builds query-parameterized GET requests for a fixed set of
//! endpoints, issues them with `reqwest` and decodes the JSON bodies into
//! typed records:
//!
//! - Real-time quotes
//! - OHLCV candles
//! - Company profiles
//! - Symbol listings per exchange
//! - Free-text symbol search
//!
//! ## Example
//!
//! ```ignore
//! use finnhub_client::prelude::*;
//!
//! let client = Client::new(Config::with_token("your-token"))?;
//! let quote = client.get_quote("AAPL").await?;
//! let candle = client.get_candle("aapl", "D", 1_700_000_000, 1_700_600_000).await?;
//! let symbols = client.search_all_stock("US", "AAPL").await?;
//! ```
//!
//! ## Errors
//!
//! Every method resolves to `Result<_, AppError>`. Use [`AppError::kind`] to
//! tell a transport failure apart from a payload that could not be decoded,
//! or from an argument rejected before any request was sent.
//!
//! [`AppError::kind`]: crate::error::AppError::kind

/// Application layer: client, configuration and service interfaces
pub mod application;

/// Global constants
pub mod constants;

/// Error type shared by every operation
pub mod error;

/// Endpoints, exchanges and HTTP plumbing
pub mod model;

/// Response models returned by the API
pub mod presentation;

/// Convenient re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
