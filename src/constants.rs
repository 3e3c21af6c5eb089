/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Base URL of the Finnhub REST API (version 1)
pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
/// Default socket timeout in seconds applied to every request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("finnhub-client/", env!("CARGO_PKG_VERSION"));
/// Name of the query parameter carrying the API token
pub const TOKEN_PARAM: &str = "token";

/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "FINNHUB_TOKEN";
/// Environment variable overriding the REST base URL
pub const ENV_REST_BASE_URL: &str = "FINNHUB_REST_BASE_URL";
/// Environment variable overriding the socket timeout in seconds
pub const ENV_REST_TIMEOUT: &str = "FINNHUB_REST_TIMEOUT";
/// Environment variable selecting the log level
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";
