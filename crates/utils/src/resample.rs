//! Weekly resampling.

use std::collections::BTreeMap;

use betalens_primitives::{Date, GroupedRow, week_start};
use betalens_traits::SeriesTransform;

/// Average a series into calendar weeks starting on Sunday.
///
/// Every row lands in the bucket of the Sunday on or before its date; each
/// bucket emits one row dated on that Sunday holding the unweighted mean of
/// each group. Output is ascending with one row per week.
#[must_use]
pub fn weekly_averages(series: &[GroupedRow]) -> Vec<GroupedRow> {
    let mut buckets: BTreeMap<Date, (Vec<f64>, usize)> = BTreeMap::new();

    for row in series {
        let (sums, count) = buckets.entry(week_start(row.date)).or_default();
        if sums.len() < row.values.len() {
            sums.resize(row.values.len(), 0.0);
        }
        for (sum, value) in sums.iter_mut().zip(&row.values) {
            *sum += value;
        }
        *count += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (sums, count))| {
            let n = count as f64;
            GroupedRow::new(date, sums.into_iter().map(|s| s / n).collect())
        })
        .collect()
}

/// [`SeriesTransform`] wrapper around [`weekly_averages`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyResampler;

impl SeriesTransform for WeeklyResampler {
    fn transform(&self, series: &[GroupedRow]) -> Vec<GroupedRow> {
        weekly_averages(series)
    }

    fn name(&self) -> &str {
        "weekly"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::{Datelike, Weekday};

    use super::*;

    fn row(date: &str, value: f64) -> GroupedRow {
        GroupedRow::new(date.parse().unwrap(), vec![value, -value])
    }

    #[test]
    fn averages_within_week() {
        // Mon, Wed, Fri of the week starting Sunday 2024-01-07
        let series = vec![row("2024-01-08", 1.0), row("2024-01-10", 2.0), row("2024-01-12", 6.0)];
        let weekly = weekly_averages(&series);

        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].date, "2024-01-07".parse::<Date>().unwrap());
        assert_relative_eq!(weekly[0].values[0], 3.0);
        assert_relative_eq!(weekly[0].values[1], -3.0);
    }

    #[test]
    fn output_is_sunday_ascending_unique() {
        let series: Vec<GroupedRow> = (0..40)
            .map(|i| {
                let date = Date::from_ymd_opt(2024, 2, 1).unwrap() + chrono::Duration::days(i * 2);
                GroupedRow::new(date, vec![i as f64])
            })
            .collect();
        let weekly = weekly_averages(&series);

        assert!(!weekly.is_empty());
        assert!(weekly.iter().all(|r| r.date.weekday() == Weekday::Sun));
        assert!(weekly.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn unsorted_input_is_bucketed_and_sorted() {
        let series = vec![row("2024-01-20", 4.0), row("2024-01-02", 2.0), row("2024-01-15", 0.0)];
        let weekly = weekly_averages(&series);

        let dates: Vec<String> = weekly.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2023-12-31", "2024-01-14"]);
        assert_relative_eq!(weekly[1].values[0], 2.0);
    }

    #[test]
    fn sunday_rows_start_their_own_week() {
        let series = vec![row("2024-01-06", 1.0), row("2024-01-07", 3.0)];
        let weekly = weekly_averages(&series);
        assert_eq!(weekly.len(), 2);
    }

    #[test]
    fn empty_series() {
        assert!(WeeklyResampler.transform(&[]).is_empty());
        assert_eq!(WeeklyResampler.name(), "weekly");
    }
}
