use chrono::{Duration, Utc};
use finnhub_client::application::client::Client;
use finnhub_client::application::interfaces::market::MarketService;
use finnhub_client::utils::setup_logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;

    let to = Utc::now();
    let from = to - Duration::days(30);
    let candle = client
        .get_candle("msft", "D", from.timestamp(), to.timestamp())
        .await?;

    if !candle.is_ok() {
        warn!("No candles returned, status: {}", candle.status);
        return Ok(());
    }

    for bar in candle.bars() {
        info!(
            "{} o={:.2} h={:.2} l={:.2} c={:.2} v={}",
            bar.time.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }

    Ok(())
}
