// Common utilities for client tests

use finnhub_client::application::client::Client;
use finnhub_client::config::Config;

pub const TEST_TOKEN: &str = "test-token";

/// Creates a client pointing at a mock server
pub fn create_test_client(server_url: &str) -> Client {
    let config = Config::with_token(TEST_TOKEN)
        .with_base_url(server_url)
        .with_timeout(5);
    Client::new(config).expect("Failed to create client")
}

/// Symbol listing with a mix of MICs, symbols and FIGIs
pub const SYMBOL_LIST: &str = r#"[
    {"currency":"USD","description":"APPLE INC","displaySymbol":"AAPL","figi":"BBG000B9XRY4","mic":"XNGS","symbol":"AAPL","type":"Common Stock","shareClassFIGI":"BBG001S5N8V8","isin":null,"symbol2":""},
    {"currency":"USD","description":"MICROSOFT CORP","displaySymbol":"MSFT","figi":"BBG000BPH459","mic":"XNGS","symbol":"MSFT","type":"Common Stock"},
    {"currency":"USD","description":"INTL BUSINESS MACHINES CORP","displaySymbol":"IBM","figi":"BBG000BLNNH6","mic":"XNYS","symbol":"IBM","type":"Common Stock"},
    {"currency":"USD","description":"MICROSOFT CORP","displaySymbol":"MSFT","figi":"BBG000BPH999","mic":"XNYS","symbol":"MSFT","type":"Common Stock"},
    {"currency":"USD","description":"NVIDIA CORP","displaySymbol":"NVDA","figi":"BBG000BBJQV0","mic":"XNGS","symbol":"NVDA","type":"Common Stock"}
]"#;
