use finnhub_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;

    let lookup = client.search_symbol("apple").await?;
    match &lookup.result {
        Some(result) => {
            info!("Search returned {} results", lookup.count.unwrap_or_default());
            for symbol in result.iter().take(5) {
                info!("{}", symbol);
            }
        }
        None => warn!("Search response carried no result list"),
    }

    let found = client.search_all_stock("US", "AAPL").await?;
    match found.first() {
        Some(stock) => info!("Found: {}", stock),
        None => warn!("AAPL not found on US"),
    }

    let mics = vec!["XNGS".to_string()];
    let symbols = vec!["AAPL".to_string(), "MSFT".to_string(), "NVDA".to_string()];
    let filtered = client.search_all_stock_by_mics("US", &mics, &symbols).await?;
    info!("{} stocks on XNGS", filtered.len());

    match client.get_symbols("ATLANTIS").await {
        Err(e) if e.is_invalid_argument() => info!("Rejected before sending: {}", e),
        other => warn!("Unexpected result: {:?}", other.map(|s| s.len())),
    }

    Ok(())
}
