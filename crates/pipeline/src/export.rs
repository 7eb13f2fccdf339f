//! CSV export of a displayed series.

use betalens_primitives::{Date, DateWindow, FactorGroups, GroupedRow, ViewSelection};

use crate::ExportError;

/// Group selections longer than this are summarized by count in filenames.
const MAX_NAMED_GROUPS: usize = 3;

/// Render a series as CSV with a `Date` column followed by the selected groups.
///
/// Every cell, header included, is double-quoted. Group columns follow table
/// order regardless of the order of `selected`; values carry six decimals.
///
/// # Errors
/// Returns `ExportError` when the series is empty, nothing is selected, or a
/// selected name is not in `groups`.
pub fn export_csv(
    series: &[GroupedRow],
    groups: &FactorGroups,
    selected: &[&str],
) -> Result<String, ExportError> {
    if series.is_empty() {
        return Err(ExportError::EmptySeries);
    }
    if selected.is_empty() {
        return Err(ExportError::NoGroupsSelected);
    }
    if let Some(unknown) = selected.iter().find(|name| groups.position(name).is_none()) {
        return Err(ExportError::UnknownGroup((*unknown).to_string()));
    }

    let columns: Vec<(usize, &str)> = groups
        .iter()
        .enumerate()
        .filter(|(_, group)| selected.contains(&group.name()))
        .map(|(position, group)| (position, group.name()))
        .collect();

    let header = std::iter::once("Date")
        .chain(columns.iter().map(|&(_, name)| name))
        .map(quote)
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(series.len() + 1);
    lines.push(header);
    for row in series {
        let cells: Vec<String> = std::iter::once(quote(&row.date.to_string()))
            .chain(columns.iter().map(|&(position, _)| quote(&format_value(row.value(position)))))
            .collect();
        lines.push(cells.join(","));
    }

    Ok(lines.join("\n"))
}

/// Filename for an export: `beta_export_<view>_<groups>_<range>_<today>.csv`.
#[must_use]
pub fn export_filename(
    selected: &[&str],
    window: &DateWindow,
    view: &ViewSelection,
    today: Date,
) -> String {
    let mut names = selected.to_vec();
    names.sort_unstable();
    names.dedup();

    let groups = if names.len() <= MAX_NAMED_GROUPS {
        names.join("_").to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
    } else {
        format!("{}groups", names.len())
    };

    let stem = ["beta_export".to_string(), view.descriptor(), groups, window.descriptor(), today.to_string()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{stem}.csv")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn format_value(value: f64) -> String {
    // Only an exact negative zero loses its sign; tiny negatives keep it
    format!("{:.6}", if value == 0.0 { 0.0 } else { value })
}
