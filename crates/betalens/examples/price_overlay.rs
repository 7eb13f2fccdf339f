//! Example: Market Index Overlay
//!
//! Fetches daily closes for the configured index, aligns them to a weekly
//! series and prints the standardized overlay next to the Value group.
//!
//! Run with: `cargo run --example price_overlay`
//!
//! `BETALENS_QUOTE_URL` and `BETALENS_SYMBOL` (or a `.env` file) override the
//! quote host and symbol.

use betalens::{
    prices::{PriceConfig, YahooChartClient, overlay_prices},
    primitives::{FactorGroups, GroupedRow, today, week_start},
};
use chrono::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PriceConfig::from_env();
    let client = YahooChartClient::from_config(&config);
    let groups = FactorGroups::reference();

    println!("=== {} overlay via {} ===\n", client.symbol(), config.base_url);

    // Twelve weekly rows ending on the most recent Sunday
    let last = week_start(today());
    let series: Vec<GroupedRow> = (0..12)
        .rev()
        .map(|weeks| {
            let value = 0.1 * f64::from(weeks % 4) - 0.15;
            GroupedRow::new(last - Duration::weeks(i64::from(weeks)), vec![value; groups.len()])
        })
        .collect();

    let overlay = overlay_prices(&client, &series, &config).await;
    if overlay.is_empty() {
        println!("No prices matched; check the quote URL and network access.");
        return Ok(());
    }

    println!(
        "Matched {} of {} weeks (mean {:.2}, std dev {:.2}, scale {})\n",
        overlay.points.len(),
        series.len(),
        overlay.mean,
        overlay.std_dev,
        overlay.scale_factor
    );
    println!("{:<12}{:>12}{:>12}{:>10}", "Week", "Close", "Overlay", "Value");
    for point in &overlay.points {
        let value = point.source.get(&groups, "Value").unwrap_or_default();
        println!(
            "{:<12}{:>12.2}{:>12.4}{:>10.4}",
            point.date.to_string(),
            point.price,
            point.standardized_price,
            value
        );
    }

    Ok(())
}
