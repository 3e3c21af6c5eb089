use finnhub_client::application::client::Client;
use finnhub_client::application::interfaces::market::MarketService;
use finnhub_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Token and base URL come from FINNHUB_TOKEN / .env
    let client = Client::from_env()?;

    let quote = client.get_quote("AAPL").await?;
    info!("Quote: {}", quote);
    if let Some(time) = quote.datetime() {
        info!("Quoted at {}", time);
    }

    let profile = client.get_company_profile("AAPL").await?;
    info!("Profile: {:#?}", profile);

    Ok(())
}
