/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Finnhub REST client
//!
//! # Example
//! ```ignore
//! use finnhub_client::application::client::Client;
//! use finnhub_client::application::interfaces::market::MarketService;
//! use finnhub_client::config::Config;
//!
//! let client = Client::new(Config::new())?;
//! let profile = client.get_company_profile("MSFT").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::market::MarketService;
use crate::application::search::{filter_by_mics_and_symbols, find_exact_symbol};
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::exchange::Exchange;
use crate::model::http::{
    build_http_client, build_url, decode_response, describe_params, make_http_request,
};
use crate::presentation::{Candle, CompanyProfile, EnrichedSymbol, Quote, SymbolLookup};
use async_trait::async_trait;
use reqwest::Client as HttpInternalClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Client for the Finnhub REST API
///
/// Holds the configuration and the HTTP transport, both read-only after
/// construction. Cloning is cheap and clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Token and REST settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        if !config.has_token() {
            warn!("Creating Finnhub client without an API token");
        }
        let http_client = build_http_client(config.rest_api.timeout)?;
        Ok(Self::with_http_client(http_client, config))
    }

    /// Creates a client configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client with the given token and default settings
    pub fn with_token(token: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_token(token))
    }

    /// Creates a client on top of an existing reqwest client
    ///
    /// The configured timeout is not applied; the caller's client settings win.
    pub fn with_http_client(http_client: HttpInternalClient, config: Config) -> Self {
        Self {
            http_client,
            config: Arc::new(config),
        }
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the URL of a request against the configured base URL
    pub fn url_for(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Url, AppError> {
        build_url(
            &self.config.rest_api.base_url,
            endpoint,
            &self.config.token,
            params,
        )
    }

    /// Issues one GET request and decodes the body
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<T, AppError> {
        let url = self.url_for(endpoint, params)?;
        debug!("GET {} {}", endpoint, describe_params(params));
        let body = make_http_request(&self.http_client, url).await?;
        decode_response(&body)
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, AppError> {
        self.get(Endpoint::Quote, &[("symbol", symbol)]).await
    }

    async fn get_candle(
        &self,
        symbol: &str,
        resolution: &str,
        from: i64,
        to: i64,
    ) -> Result<Candle, AppError> {
        // the candle endpoint only accepts upper-case symbols
        let symbol = symbol.to_uppercase();
        let from = from.to_string();
        let to = to.to_string();
        self.get(
            Endpoint::Candle,
            &[
                ("symbol", symbol.as_str()),
                ("resolution", resolution),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ],
        )
        .await
    }

    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile, AppError> {
        self.get(Endpoint::CompanyProfile, &[("symbol", symbol)])
            .await
    }

    async fn get_symbols(&self, exchange_name: &str) -> Result<Vec<EnrichedSymbol>, AppError> {
        let exchange: Exchange = exchange_name.parse()?;
        self.get(Endpoint::Symbol, &[("exchange", exchange.code())])
            .await
    }

    async fn get_symbols_by_mic(
        &self,
        exchange_name: &str,
        mic: &str,
    ) -> Result<Vec<EnrichedSymbol>, AppError> {
        let exchange: Exchange = exchange_name.parse()?;
        self.get(
            Endpoint::Symbol,
            &[("exchange", exchange.code()), ("mic", mic)],
        )
        .await
    }

    async fn list_symbols(&self, exchange: &str) -> Result<Vec<EnrichedSymbol>, AppError> {
        self.get(Endpoint::Symbol, &[("exchange", exchange)]).await
    }

    async fn search_symbol(&self, query: &str) -> Result<SymbolLookup, AppError> {
        self.get(Endpoint::SymbolLookup, &[("q", query)]).await
    }

    async fn search_all_stock(
        &self,
        exchange: &str,
        symbol: &str,
    ) -> Result<Vec<EnrichedSymbol>, AppError> {
        let stocks = self.list_symbols(exchange).await?;
        let total = stocks.len();
        let found = find_exact_symbol(stocks, symbol);
        info!(
            "Searched {} symbols on {} for {}: {} found",
            total,
            exchange,
            symbol,
            found.len()
        );
        Ok(found)
    }

    async fn search_all_stock_by_mics(
        &self,
        exchange: &str,
        mics: &[String],
        symbols: &[String],
    ) -> Result<Vec<EnrichedSymbol>, AppError> {
        let stocks = self.list_symbols(exchange).await?;
        let total = stocks.len();
        let found = filter_by_mics_and_symbols(stocks, mics, symbols);
        info!(
            "Filtered {} symbols on {} by {} mics and {} symbols: {} kept",
            total,
            exchange,
            mics.len(),
            symbols.len(),
            found.len()
        );
        Ok(found)
    }
}
