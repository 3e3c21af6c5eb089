/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::fmt;

/// REST endpoints exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Real-time quote
    Quote,
    /// Company profile (version 2)
    CompanyProfile,
    /// Symbols listed on an exchange
    Symbol,
    /// Free-text symbol search
    SymbolLookup,
    /// OHLCV candles
    Candle,
}

impl Endpoint {
    /// Path relative to the API base URL
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Quote => "quote",
            Endpoint::CompanyProfile => "stock/profile2",
            Endpoint::Symbol => "stock/symbol",
            Endpoint::SymbolLookup => "search",
            Endpoint::Candle => "stock/candle",
        }
    }

    /// Joins this endpoint onto a base URL
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
