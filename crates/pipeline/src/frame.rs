//! Polars interop.

use betalens_primitives::{FactorGroups, GroupedRow};
use chrono::Datelike;
use polars::prelude::*;

use crate::PipelineError;

/// Days from 0001-01-01 (CE day 1) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Convert a grouped series to a `DataFrame`.
///
/// The frame has a `date` column of `Date` dtype followed by one `f64`
/// column per group, named after the group, in table order.
///
/// # Errors
/// Returns `PipelineError::Polars` if the frame cannot be assembled.
pub fn series_to_frame(
    series: &[GroupedRow],
    groups: &FactorGroups,
) -> Result<DataFrame, PipelineError> {
    let days: Vec<i32> =
        series.iter().map(|row| row.date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE).collect();
    let dates = Series::new("date".into(), days).cast(&DataType::Date)?;

    let mut columns: Vec<Column> = Vec::with_capacity(groups.len() + 1);
    columns.push(dates.into());
    for (position, group) in groups.iter().enumerate() {
        let values: Vec<f64> = series.iter().map(|row| row.value(position)).collect();
        columns.push(Column::new(group.name().into(), values));
    }

    Ok(DataFrame::new(columns)?)
}
