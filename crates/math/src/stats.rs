//! Summary statistics over grouped series.

use betalens_primitives::{FactorGroups, GroupedRow};

/// Descriptive statistics for a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Statistics for one factor group across a series.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatistics {
    /// Group name.
    pub name: String,
    /// Statistics of the group's values.
    pub summary: Summary,
}

/// Summarize a sample, `None` when empty.
#[must_use]
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(Summary { count: values.len(), mean, std_dev: variance.sqrt(), min, max })
}

/// Per-group statistics of a series, in table order.
///
/// Returns an empty vector for an empty series.
#[must_use]
pub fn group_statistics(series: &[GroupedRow], groups: &FactorGroups) -> Vec<GroupStatistics> {
    groups
        .iter()
        .enumerate()
        .filter_map(|(position, group)| {
            let values: Vec<f64> = series.iter().map(|row| row.value(position)).collect();
            summarize(&values)
                .map(|summary| GroupStatistics { name: group.name().to_string(), summary })
        })
        .collect()
}
