//! Price overlay configuration.

use std::env;

/// Quote-history host used when `BETALENS_QUOTE_URL` is unset.
pub const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com";

/// S&P 500 index.
pub const DEFAULT_SYMBOL: &str = "^GSPC";

/// Settings for fetching and aligning index prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceConfig {
    /// Base URL of the quote-history endpoint, without a trailing slash.
    pub base_url: String,
    /// Instrument symbol, unencoded.
    pub symbol: String,
    /// Days added before the earliest and after the latest requested date.
    pub padding_days: i64,
    /// Largest accepted distance between a date and its matched price.
    pub tolerance_days: i64,
    /// Multiplier applied to price z-scores.
    pub scale_factor: f64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_QUOTE_URL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            padding_days: 7,
            tolerance_days: 7,
            scale_factor: 0.3,
        }
    }
}

impl PriceConfig {
    /// Defaults overridden by `BETALENS_QUOTE_URL` and `BETALENS_SYMBOL`.
    ///
    /// This will also load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(url) = env::var("BETALENS_QUOTE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(symbol) = env::var("BETALENS_SYMBOL") {
            config.symbol = symbol;
        }
        config
    }
}
