/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Finnhub Client Prelude
//!
//! Imports the types needed for most interactions with the Finnhub API.
//!
//! ## Usage
//!
//! ```rust
//! use finnhub_client::prelude::*;
//!
//! let config = Config::with_token("your-token");
//! let client = Client::new(config).expect("http client");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Finnhub API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Finnhub REST client
pub use crate::application::client::Client;

/// Market service trait
pub use crate::application::interfaces::market::MarketService;

/// Client-side symbol filters
pub use crate::application::search::{filter_by_mics_and_symbols, find_exact_symbol};

// ============================================================================
// ENDPOINTS AND EXCHANGES
// ============================================================================

pub use crate::model::endpoint::Endpoint;
pub use crate::model::exchange::Exchange;

// ============================================================================
// MODELS
// ============================================================================

/// Response models
pub use crate::presentation::{
    Candle, CandleBar, CompanyProfile, EnrichedSymbol, Quote, Symbol, SymbolLookup,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
