//! Ranking of single-factor moves over a trailing window.

use betalens_primitives::{Date, DateWindow, FACTOR_COUNT, FactorGroups, RawRow};
use chrono::Duration;
use tracing::{debug, warn};

/// Configuration for [`top_changes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankerConfig {
    /// Trailing window length in days, ending on the reference date.
    pub lookback_days: i64,
    /// Maximum number of entries returned.
    pub top_n: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self { lookback_days: 28, top_n: 10 }
    }
}

/// Percentage move of one raw factor between two rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorChange {
    /// 1-based factor index.
    pub index: usize,
    /// Signed percentage change relative to the absolute previous value.
    pub pct_change: f64,
    /// Absolute percentage change, the ranking key.
    pub abs_pct_change: f64,
    /// Name of the group containing the factor, or `"Unknown"`.
    pub category: String,
    /// Value on `current_date`.
    pub current_value: f64,
    /// Value on `previous_date`.
    pub previous_value: f64,
    /// Date of the newest row in the window.
    pub current_date: Date,
    /// Date of the oldest row in the window.
    pub previous_date: Date,
}

/// Rank raw factors by their percentage move across the trailing window.
///
/// The reference date is the custom window's explicit end if there is one,
/// otherwise the latest row date. Rows from `reference - lookback_days`
/// through the reference date are kept in date order (stable, so file order
/// breaks ties); the first and last of them are compared factor by factor.
/// Factors whose previous value is exactly zero are skipped.
///
/// # Returns
/// At most `config.top_n` changes ordered by descending absolute change, or
/// an empty vector when fewer than two rows fall inside the window.
#[must_use]
pub fn top_changes<'a>(
    rows: impl IntoIterator<Item = &'a RawRow>,
    window: &DateWindow,
    groups: &FactorGroups,
    config: &RankerConfig,
) -> Vec<FactorChange> {
    let mut skipped = 0usize;
    let mut dated: Vec<(Date, &RawRow)> = Vec::new();
    for row in rows {
        match row.parsed_date() {
            Some(date) => dated.push((date, row)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "ignoring rows with unparsable dates while ranking changes");
    }

    if dated.len() < 2 {
        return Vec::new();
    }

    dated.sort_by_key(|(date, _)| *date);

    let Some(&(latest, _)) = dated.last() else {
        return Vec::new();
    };
    let reference = window.custom_end().unwrap_or(latest);
    let window_start = reference - Duration::days(config.lookback_days);

    let recent: Vec<&(Date, &RawRow)> =
        dated.iter().filter(|(date, _)| *date >= window_start && *date <= reference).collect();

    if recent.len() < 2 {
        debug!(rows = recent.len(), %reference, "not enough rows in trailing window");
        return Vec::new();
    }
    let (previous_date, oldest) = *recent[0];
    let (current_date, newest) = *recent[recent.len() - 1];

    let mut changes: Vec<FactorChange> = (1..=FACTOR_COUNT)
        .filter_map(|index| {
            let previous_value = oldest.factor(index);
            if previous_value == 0.0 {
                return None;
            }
            let current_value = newest.factor(index);
            let pct_change = (current_value - previous_value) / previous_value.abs() * 100.0;

            Some(FactorChange {
                index,
                pct_change,
                abs_pct_change: pct_change.abs(),
                category: groups.category_of(index).to_string(),
                current_value,
                previous_value,
                current_date,
                previous_date,
            })
        })
        .collect();

    changes.sort_by(|a, b| b.abs_pct_change.total_cmp(&a.abs_pct_change));
    changes.truncate(config.top_n);
    changes
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use betalens_primitives::UNKNOWN_CATEGORY;

    use super::*;

    fn row(date: &str, values: Vec<f64>) -> RawRow {
        RawRow::new(date, "Tech", 1.0, values)
    }

    fn ramp(scale: f64) -> Vec<f64> {
        (1..=FACTOR_COUNT).map(|i| i as f64 * scale).collect()
    }

    #[test]
    fn at_most_top_n_descending() {
        let mut newer = ramp(1.0);
        for (i, v) in newer.iter_mut().enumerate() {
            *v *= 1.0 + (i % 17) as f64 / 10.0;
        }
        let rows = vec![row("2024-01-01", ramp(1.0)), row("2024-01-15", newer)];

        let out = top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default());
        assert_eq!(out.len(), 10);
        assert!(out.windows(2).all(|w| w[0].abs_pct_change >= w[1].abs_pct_change));
        assert_relative_eq!(out[0].abs_pct_change, 160.0, epsilon = 1e-9);
    }

    #[test]
    fn signed_change_and_metadata() {
        let mut old = vec![1.0; FACTOR_COUNT];
        let mut new = vec![1.0; FACTOR_COUNT];
        old[68] = -2.0; // factor 69 is ungrouped
        new[68] = -1.0;
        old[0] = 4.0;
        new[0] = 1.0;

        let rows = vec![row("2024-03-01", old), row("2024-03-08", new)];
        let out = top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default());

        assert_eq!(out.len(), 10);
        assert_eq!(out[0].index, 1);
        assert_relative_eq!(out[0].pct_change, -75.0);
        assert_eq!(out[0].category, "Value");
        assert_eq!(out[1].index, 69);
        assert_relative_eq!(out[1].pct_change, 50.0);
        assert_eq!(out[1].category, UNKNOWN_CATEGORY);
        assert_eq!(out[1].previous_date.to_string(), "2024-03-01");
        assert_eq!(out[1].current_date.to_string(), "2024-03-08");
    }

    #[test]
    fn zero_previous_values_are_skipped() {
        let rows = vec![row("2024-03-01", vec![0.0; FACTOR_COUNT]), row("2024-03-08", ramp(1.0))];
        let out = top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn insufficient_rows_in_window() {
        // Only the newest row lies within 28 days of itself
        let rows = vec![row("2024-01-01", ramp(1.0)), row("2024-03-01", ramp(2.0))];
        let out = top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default());
        assert!(out.is_empty());

        let single = vec![row("2024-01-01", ramp(1.0))];
        assert!(top_changes(&single, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default()).is_empty());
    }

    #[test]
    fn window_uses_first_and_last_rows_in_date_order() {
        // Out of file order; the 2023 row lies outside the trailing window
        let rows = vec![
            row("2024-02-20", ramp(3.0)),
            row("2023-06-01", ramp(100.0)),
            row("2024-02-01", ramp(1.0)),
            row("2024-02-10", ramp(2.0)),
        ];
        let out = top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &RankerConfig::default());

        assert!(!out.is_empty());
        assert_relative_eq!(out[0].pct_change, 200.0, epsilon = 1e-9);
        assert_eq!(out[0].previous_date.to_string(), "2024-02-01");
        assert_eq!(out[0].current_date.to_string(), "2024-02-20");
    }

    #[test]
    fn custom_end_sets_reference_date() {
        let rows = vec![
            row("2024-01-01", ramp(1.0)),
            row("2024-01-20", ramp(2.0)),
            row("2024-06-01", ramp(50.0)),
        ];
        let window = DateWindow::Custom { start: None, end: Some("2024-01-25".parse().unwrap()) };
        let out = top_changes(&rows, &window, &FactorGroups::reference(), &RankerConfig::default());

        assert_eq!(out[0].current_date.to_string(), "2024-01-20");
        assert_relative_eq!(out[0].pct_change, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn respects_config() {
        let rows = vec![row("2024-01-01", ramp(1.0)), row("2024-01-20", ramp(2.0))];
        let config = RankerConfig { lookback_days: 7, top_n: 3 };
        assert!(top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &config).is_empty());

        let config = RankerConfig { lookback_days: 28, top_n: 3 };
        assert_eq!(top_changes(&rows, &DateWindow::All, &FactorGroups::reference(), &config).len(), 3);
    }
}
