//! Yahoo chart API client.

use std::future::Future;

use betalens_primitives::{Date, PricePoint};
use betalens_traits::{PriceSource, SourceError};
use chrono::{DateTime, NaiveTime};
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use tracing::debug;

use crate::{PriceConfig, PriceError};

/// Client for the `/v8/finance/chart/{symbol}` daily history endpoint.
#[derive(Debug, Clone)]
pub struct YahooChartClient {
    client: Client,
    base_url: String,
    symbol: String,
}

impl YahooChartClient {
    /// Create a client for one symbol against the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self { client: Client::new(), base_url: base_url.into(), symbol: symbol.into() }
    }

    /// Create a client from a [`PriceConfig`].
    #[must_use]
    pub fn from_config(config: &PriceConfig) -> Self {
        Self::new(config.base_url.clone(), config.symbol.clone())
    }

    /// The symbol this client fetches.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Chart request for a span; both bounds are UTC midnight timestamps.
    fn request(&self, start: Date, end: Date) -> Result<RequestBuilder, PriceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|err| PriceError::InvalidUrl(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| PriceError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", self.symbol.as_str()]);

        Ok(self
            .client
            .get(url)
            .query(&[("period1", unix_midnight(start)), ("period2", unix_midnight(end))])
            .query(&[("interval", "1d")]))
    }

    /// Fetch daily closes between `start` and `end`.
    ///
    /// # Errors
    /// Returns `PriceError` on transport failure, non-success status or a
    /// payload that is not a chart response.
    pub async fn fetch(&self, start: Date, end: Date) -> Result<Vec<PricePoint>, PriceError> {
        debug!(symbol = %self.symbol, %start, %end, "requesting daily chart");
        let response = self.request(start, end)?.send().await?;

        if !response.status().is_success() {
            return Err(PriceError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        parse_chart(&text)
    }
}

impl PriceSource for YahooChartClient {
    fn fetch_daily(
        &self,
        start: Date,
        end: Date,
    ) -> impl Future<Output = Result<Vec<PricePoint>, SourceError>> + Send {
        async move { self.fetch(start, end).await.map_err(SourceError::from) }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Option<Chart>,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Option<Vec<Quote>>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// Decode a chart response body into daily closes.
///
/// Timestamps map to their UTC calendar day. Missing closes and closes that
/// are not strictly positive are dropped.
///
/// # Errors
/// Returns `PriceError::Json` for invalid JSON and
/// `PriceError::MissingField` when the chart structure is incomplete.
pub fn parse_chart(body: &str) -> Result<Vec<PricePoint>, PriceError> {
    let response: ChartResponse = serde_json::from_str(body)?;

    let result = response
        .chart
        .and_then(|chart| chart.result)
        .and_then(|results| results.into_iter().next())
        .ok_or(PriceError::MissingField("chart.result"))?;
    let timestamps = result.timestamp.ok_or(PriceError::MissingField("timestamp"))?;
    let closes = result
        .indicators
        .and_then(|indicators| indicators.quote)
        .and_then(|quotes| quotes.into_iter().next())
        .and_then(|quote| quote.close)
        .ok_or(PriceError::MissingField("indicators.quote.close"))?;

    Ok(timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let date = DateTime::from_timestamp(ts, 0)?.date_naive();
            let price = closes.get(i).copied().flatten().unwrap_or(0.0);
            (price > 0.0).then(|| PricePoint::new(date, price))
        })
        .collect())
}

fn unix_midnight(date: Date) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
