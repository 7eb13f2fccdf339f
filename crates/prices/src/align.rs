//! Nearest-date price alignment and standardization.

use std::collections::BTreeMap;

use betalens_math::ZScore;
use betalens_primitives::{AlignedPoint, Date, GroupedRow, PricePoint};
use betalens_traits::PriceSource;
use chrono::Duration;
use ndarray::Array1;
use tracing::{debug, info, warn};

use crate::PriceConfig;

/// Series rows paired with standardized index prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOverlay {
    /// One point per series row that found a price, in series order.
    pub points: Vec<AlignedPoint>,
    /// Population mean of the matched prices.
    pub mean: f64,
    /// Population standard deviation of the matched prices.
    pub std_dev: f64,
    /// Multiplier applied to the z-scores; 1.0 when nothing matched.
    pub scale_factor: f64,
}

impl PriceOverlay {
    /// Overlay with no matched points.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new(), mean: 0.0, std_dev: 0.0, scale_factor: 1.0 }
    }

    /// Whether no series row was matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Closest price to `target` no more than `tolerance_days` away.
///
/// `prices` must be sorted ascending by date. When two prices are equally
/// close the earlier one wins.
#[must_use]
pub fn nearest_price(target: Date, prices: &[PricePoint], tolerance_days: i64) -> Option<PricePoint> {
    let split = prices.partition_point(|p| p.date < target);
    let before = split.checked_sub(1).and_then(|i| prices.get(i));
    let after = prices.get(split);

    let distance = |p: &PricePoint| (target - p.date).num_days().abs();
    let best = match (before, after) {
        (Some(b), Some(a)) => Some(if distance(a) < distance(b) { a } else { b }),
        (b, a) => b.or(a),
    }?;

    (distance(best) <= tolerance_days).then_some(*best)
}

/// Fetch one padded span of daily prices and match each date to its nearest close.
///
/// Issues a single request covering `min(dates) - padding_days` through
/// `max(dates) + padding_days`. A failed fetch is logged and yields an empty
/// map; dates with no close within `tolerance_days` are absent.
pub async fn fetch_prices_for_dates<S: PriceSource>(
    source: &S,
    dates: &[Date],
    config: &PriceConfig,
) -> BTreeMap<Date, PricePoint> {
    let mut matched = BTreeMap::new();
    let (Some(&first), Some(&last)) = (dates.iter().min(), dates.iter().max()) else {
        return matched;
    };

    let start = first - Duration::days(config.padding_days);
    let end = last + Duration::days(config.padding_days);
    info!(%start, %end, dates = dates.len(), "fetching daily prices");

    let mut prices = match source.fetch_daily(start, end).await {
        Ok(prices) => prices,
        Err(err) => {
            warn!(%err, "price fetch failed, continuing without prices");
            return matched;
        }
    };
    if prices.is_empty() {
        warn!(%start, %end, "no prices returned for requested span");
        return matched;
    }
    prices.sort_by_key(|p| p.date);

    for &date in dates {
        match nearest_price(date, &prices, config.tolerance_days) {
            Some(price) => {
                matched.insert(date, price);
            }
            None => debug!(%date, "no price within tolerance"),
        }
    }

    info!(matched = matched.len(), requested = dates.len(), "matched prices to dates");
    matched
}

/// Pair each series row with the nearest matched price and standardize.
///
/// Each row searches the matched prices themselves (not their keys) for the
/// closest one within `tolerance_days`. Matched prices are z-scored with the
/// population standard deviation and multiplied by `scale_factor`; a constant
/// price set standardizes to zeros.
#[must_use]
pub fn combine_and_normalize(
    series: &[GroupedRow],
    matched: &BTreeMap<Date, PricePoint>,
    config: &PriceConfig,
) -> PriceOverlay {
    let mut candidates: Vec<PricePoint> = matched.values().copied().collect();
    candidates.sort_by_key(|p| p.date);

    let pairs: Vec<(&GroupedRow, PricePoint)> = series
        .iter()
        .filter_map(|row| {
            nearest_price(row.date, &candidates, config.tolerance_days).map(|p| (row, p))
        })
        .collect();

    if pairs.is_empty() {
        return PriceOverlay::empty();
    }

    let prices = Array1::from_iter(pairs.iter().map(|(_, p)| p.price));
    let standardized = ZScore::new(config.scale_factor).apply(&prices);

    let points = pairs
        .into_iter()
        .zip(standardized.values.iter())
        .map(|((row, price), &z)| AlignedPoint {
            date: row.date,
            price: price.price,
            standardized_price: z,
            source: row.clone(),
        })
        .collect();

    debug!(
        mean = standardized.mean,
        std_dev = standardized.std_dev,
        scale = config.scale_factor,
        "standardized overlay prices"
    );
    PriceOverlay {
        points,
        mean: standardized.mean,
        std_dev: standardized.std_dev,
        scale_factor: config.scale_factor,
    }
}

/// Fetch, align and standardize index prices for every row of `series`.
pub async fn overlay_prices<S: PriceSource>(
    source: &S,
    series: &[GroupedRow],
    config: &PriceConfig,
) -> PriceOverlay {
    let dates: Vec<Date> = series.iter().map(|row| row.date).collect();
    let matched = fetch_prices_for_dates(source, &dates, config).await;
    combine_and_normalize(series, &matched, config)
}
