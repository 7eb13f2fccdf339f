//! Date-window filtering.

use betalens_primitives::{Date, DateWindow, GroupedRow};
use betalens_traits::SeriesTransform;

/// Keep rows whose date falls inside `window`, inclusive on both ends.
///
/// [`DateWindow::All`] returns the series unchanged. Presets end on `today`;
/// a custom window without an end also ends on `today`, and one without a
/// start has no lower bound.
#[must_use]
pub fn filter_by_window(series: &[GroupedRow], window: &DateWindow, today: Date) -> Vec<GroupedRow> {
    if matches!(window, DateWindow::All) {
        return series.to_vec();
    }

    let bounds = window.bounds(today);
    series.iter().filter(|row| bounds.contains(row.date)).cloned().collect()
}

/// [`SeriesTransform`] that applies a fixed window relative to a fixed day.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeFilter {
    window: DateWindow,
    today: Date,
}

impl DateRangeFilter {
    /// Create a filter for `window` evaluated on `today`.
    #[must_use]
    pub const fn new(window: DateWindow, today: Date) -> Self {
        Self { window, today }
    }

    /// The configured window.
    #[must_use]
    pub const fn window(&self) -> &DateWindow {
        &self.window
    }
}

impl SeriesTransform for DateRangeFilter {
    fn transform(&self, series: &[GroupedRow]) -> Vec<GroupedRow> {
        filter_by_window(series, &self.window, self.today)
    }

    fn name(&self) -> &str {
        "date_range"
    }
}

#[cfg(test)]
mod tests {
    use betalens_primitives::RelativePreset;
    use rstest::rstest;

    use super::*;

    fn d(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn series() -> Vec<GroupedRow> {
        ["2021-06-20", "2023-06-18", "2023-12-31", "2024-05-19", "2024-06-16", "2024-07-07"]
            .iter()
            .map(|s| GroupedRow::new(d(s), vec![1.0]))
            .collect()
    }

    #[test]
    fn all_is_identity() {
        let input = series();
        let out = filter_by_window(&input, &DateWindow::All, d("2024-06-16"));
        assert_eq!(out, input);
    }

    #[rstest]
    #[case(RelativePreset::OneMonth, 2)]
    #[case(RelativePreset::SixMonths, 3)]
    #[case(RelativePreset::OneYear, 4)]
    #[case(RelativePreset::ThreeYears, 5)]
    fn presets_end_today(#[case] preset: RelativePreset, #[case] expected: usize) {
        let out = filter_by_window(&series(), &DateWindow::Preset(preset), d("2024-06-16"));
        assert_eq!(out.len(), expected);
        // 2024-07-07 lies after today
        assert!(out.iter().all(|r| r.date <= d("2024-06-16")));
    }

    #[test]
    fn custom_bounds_are_inclusive() {
        let window = DateWindow::Custom { start: Some(d("2023-12-31")), end: Some(d("2024-06-16")) };
        let out = filter_by_window(&series(), &window, d("2030-01-01"));
        let dates: Vec<String> = out.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-05-19", "2024-06-16"]);
    }

    #[test]
    fn custom_missing_end_defaults_to_today() {
        let window = DateWindow::Custom { start: Some(d("2024-01-01")), end: None };
        let out = filter_by_window(&series(), &window, d("2024-06-01"));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn custom_missing_start_is_unbounded() {
        let window = DateWindow::Custom { start: None, end: Some(d("2023-06-18")) };
        let out = filter_by_window(&series(), &window, d("2024-06-01"));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn transform_wrapper() {
        let filter = DateRangeFilter::new(DateWindow::Preset(RelativePreset::OneMonth), d("2024-06-16"));
        assert_eq!(filter.transform(&series()).len(), 2);
        assert_eq!(filter.name(), "date_range");
    }
}
