//! Per-sector series.

use betalens_math::group_factors;
use betalens_primitives::{FactorGroups, GroupedRow, RawRow, SectorSeriesMap, SectorWeighting};
use tracing::{debug, warn};

/// Map raw rows to grouped rows one to one, in input order.
///
/// No rows are combined. Rows with unparsable dates are skipped.
#[must_use]
pub fn group_rows(rows: &[RawRow], groups: &FactorGroups) -> Vec<GroupedRow> {
    let grouped: Vec<GroupedRow> = rows.iter().filter_map(|row| group_row(row, groups)).collect();
    let skipped = rows.len() - grouped.len();
    if skipped > 0 {
        warn!(skipped, "ignoring rows with unparsable dates");
    }
    grouped
}

/// Split rows by sector and reduce each to group means.
///
/// With [`SectorWeighting::Weighted`] every group value is multiplied by that
/// row's own `sector_weight`; no normalization across sectors is applied.
/// Each sector's series is sorted ascending by date, stably, so rows sharing
/// a date keep file order.
#[must_use]
pub fn partition_sectors(
    rows: &[RawRow],
    groups: &FactorGroups,
    weighting: SectorWeighting,
) -> SectorSeriesMap {
    let mut sectors = SectorSeriesMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(grouped) = group_row(row, groups) else {
            skipped += 1;
            continue;
        };
        let grouped = match weighting {
            SectorWeighting::Weighted => grouped.scaled(row.sector_weight),
            SectorWeighting::Unweighted => grouped,
        };
        sectors.entry(row.sector.clone()).or_default().push(grouped);
    }

    for series in sectors.values_mut() {
        series.sort_by_key(|row| row.date);
    }

    if skipped > 0 {
        warn!(skipped, "ignoring rows with unparsable dates in sector partition");
    }
    debug!(sectors = sectors.len(), %weighting, "partitioned sectors");
    sectors
}

fn group_row(row: &RawRow, groups: &FactorGroups) -> Option<GroupedRow> {
    let date = row.parsed_date()?;
    Some(GroupedRow::new(date, group_factors(row.factors(), groups)))
}
