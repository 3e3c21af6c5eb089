/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::presentation::{Candle, CompanyProfile, EnrichedSymbol, Quote, SymbolLookup};
use async_trait::async_trait;

/// Interface for the market data service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets the real-time quote of a symbol
    async fn get_quote(&self, symbol: &str) -> Result<Quote, AppError>;

    /// Gets OHLCV candles of a symbol
    ///
    /// # Arguments
    /// * `symbol` - Instrument symbol, upper-cased before sending
    /// * `resolution` - Bar resolution (`1`, `5`, `15`, `30`, `60`, `D`, `W`, `M`)
    /// * `from` - Inclusive range start, Unix seconds
    /// * `to` - Inclusive range end, Unix seconds
    async fn get_candle(
        &self,
        symbol: &str,
        resolution: &str,
        from: i64,
        to: i64,
    ) -> Result<Candle, AppError>;

    /// Gets the profile of a company
    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile, AppError>;

    /// Lists the symbols of an exchange identified by its key (e.g. `LONDON`)
    ///
    /// Fails with [`AppError::UnknownExchange`] before any request is sent
    /// when the key is not in the exchange table.
    async fn get_symbols(&self, exchange_name: &str) -> Result<Vec<EnrichedSymbol>, AppError>;

    /// Lists the symbols of an exchange restricted to one MIC
    async fn get_symbols_by_mic(
        &self,
        exchange_name: &str,
        mic: &str,
    ) -> Result<Vec<EnrichedSymbol>, AppError>;

    /// Lists the symbols of an exchange given its raw provider code (e.g. `US`)
    async fn list_symbols(&self, exchange: &str) -> Result<Vec<EnrichedSymbol>, AppError>;

    /// Searches symbols by free text
    async fn search_symbol(&self, query: &str) -> Result<SymbolLookup, AppError>;

    /// Finds a single stock on an exchange by exact symbol
    ///
    /// Returns zero or one entry; an entry without FIGI counts as no match.
    async fn search_all_stock(
        &self,
        exchange: &str,
        symbol: &str,
    ) -> Result<Vec<EnrichedSymbol>, AppError>;

    /// Finds the stocks of an exchange whose MIC is in `mics` and whose symbol is in `symbols`
    async fn search_all_stock_by_mics(
        &self,
        exchange: &str,
        mics: &[String],
        symbols: &[String],
    ) -> Result<Vec<EnrichedSymbol>, AppError>;
}
