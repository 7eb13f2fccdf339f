//! Sector-weighted universe aggregation.

use std::collections::BTreeMap;

use betalens_math::{group_factors, normalize_weights, weighted_factor_sum};
use betalens_primitives::{Date, FactorGroups, GroupedRow, RawRow, SeriesByDate};
use ndarray::Array1;
use tracing::{debug, warn};

use crate::PipelineError;

/// Combine every sector's row on each date into one universe row.
///
/// Rows sharing a date are averaged factor by factor with weights
/// `sector_weight / Σ sector_weight`, then reduced to group means. A date
/// whose weights sum to exactly zero is dropped. Rows with unparsable dates
/// are skipped.
///
/// # Returns
/// One grouped row per surviving date, ascending.
///
/// # Errors
/// Returns `PipelineError::Math` if the weighted-sum kernel rejects its input.
pub fn aggregate_universe(
    rows: &[RawRow],
    groups: &FactorGroups,
) -> Result<SeriesByDate, PipelineError> {
    let mut by_date: BTreeMap<Date, Vec<&RawRow>> = BTreeMap::new();
    let mut skipped = 0usize;
    for row in rows {
        match row.parsed_date() {
            Some(date) => by_date.entry(date).or_default().push(row),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "ignoring rows with unparsable dates in universe aggregation");
    }

    let mut series = Vec::with_capacity(by_date.len());
    for (date, members) in by_date {
        let weights = Array1::from_iter(members.iter().map(|row| row.sector_weight));
        let Some(normalized) = normalize_weights(&weights) else {
            debug!(%date, sectors = members.len(), "dropping date with zero total sector weight");
            continue;
        };

        let vectors: Vec<&[f64]> = members.iter().map(|row| row.factors()).collect();
        let weighted = weighted_factor_sum(&vectors, &normalized)?;
        series.push(GroupedRow::new(date, group_factors(&weighted.to_vec(), groups)));
    }

    debug!(dates = series.len(), "aggregated universe series");
    Ok(series)
}
