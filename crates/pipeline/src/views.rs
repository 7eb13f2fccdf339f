//! The assembled set of chartable views.

use betalens_math::{GroupStatistics, group_statistics};
use betalens_primitives::{
    Date, DateWindow, FactorGroups, GroupedRow, RawRow, SectorSeriesMap, SectorWeighting,
    SeriesByDate, ViewSelection,
};
use betalens_traits::SeriesTransform;
use betalens_utils::{DateRangeFilter, FactorChange, RankerConfig, WeeklyResampler, top_changes};
use tracing::{debug, info};

use crate::{PipelineError, aggregate_universe, export_csv, ingest, partition_sectors};

/// Weekly universe and per-sector series built from one beta file.
///
/// All three series families are weekly averages dated on Sundays. The raw
/// rows are kept for change ranking, which works on unresampled values.
#[derive(Debug, Clone)]
pub struct BetaViews {
    groups: FactorGroups,
    rows: Vec<RawRow>,
    universe: SeriesByDate,
    weighted: SectorSeriesMap,
    unweighted: SectorSeriesMap,
}

impl BetaViews {
    /// Parse CSV text and build every view.
    ///
    /// # Errors
    /// Returns `PipelineError::NoValidRows` when the text has data lines but
    /// none of them parse into a row.
    pub fn from_csv(text: &str, groups: FactorGroups) -> Result<Self, PipelineError> {
        let (rows, lines) = ingest::read_rows(text);
        if rows.is_empty() && lines > 0 {
            return Err(PipelineError::NoValidRows { lines });
        }
        Self::from_rows(rows, groups)
    }

    /// Build every view from already parsed rows.
    ///
    /// # Errors
    /// Returns `PipelineError::Math` if universe aggregation fails.
    pub fn from_rows(rows: Vec<RawRow>, groups: FactorGroups) -> Result<Self, PipelineError> {
        let weekly = WeeklyResampler;

        let universe = weekly.transform(&aggregate_universe(&rows, &groups)?);
        let resample = |sectors: SectorSeriesMap| -> SectorSeriesMap {
            sectors.into_iter().map(|(name, series)| (name, weekly.transform(&series))).collect()
        };
        let weighted = resample(partition_sectors(&rows, &groups, SectorWeighting::Weighted));
        let unweighted = resample(partition_sectors(&rows, &groups, SectorWeighting::Unweighted));

        info!(
            rows = rows.len(),
            weeks = universe.len(),
            sectors = unweighted.len(),
            "built beta views"
        );
        Ok(Self { groups, rows, universe, weighted, unweighted })
    }

    /// The group table every series is laid out against.
    #[must_use]
    pub const fn groups(&self) -> &FactorGroups {
        &self.groups
    }

    /// All parsed rows, in file order.
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Sector names in sorted order.
    #[must_use]
    pub fn sectors(&self) -> Vec<&str> {
        self.unweighted.keys().map(String::as_str).collect()
    }

    /// Weekly series for a view; empty for an unknown sector.
    #[must_use]
    pub fn series(&self, view: &ViewSelection) -> &[GroupedRow] {
        match view {
            ViewSelection::Universe => &self.universe,
            ViewSelection::Sector { name, weighting } => {
                let sectors = match weighting {
                    SectorWeighting::Weighted => &self.weighted,
                    SectorWeighting::Unweighted => &self.unweighted,
                };
                sectors.get(name).map(Vec::as_slice).unwrap_or_default()
            }
        }
    }

    /// Raw rows behind a view: one sector's rows, or all rows for the universe.
    pub fn raw_rows<'a>(&'a self, view: &'a ViewSelection) -> impl Iterator<Item = &'a RawRow> + 'a {
        let sector = view.sector_name();
        self.rows.iter().filter(move |row| sector.is_none_or(|name| row.sector == name))
    }

    /// Weekly series for a view restricted to a date window.
    #[must_use]
    pub fn filtered(&self, view: &ViewSelection, window: &DateWindow, today: Date) -> Vec<GroupedRow> {
        let filter = DateRangeFilter::new(*window, today);
        let series = filter.transform(self.series(view));
        debug!(view = %view.descriptor(), transform = filter.name(), rows = series.len(), "filtered view");
        series
    }

    /// Largest single-factor moves over the trailing window of a view's raw rows.
    #[must_use]
    pub fn top_changes(
        &self,
        view: &ViewSelection,
        window: &DateWindow,
        config: &RankerConfig,
    ) -> Vec<FactorChange> {
        top_changes(self.raw_rows(view), window, &self.groups, config)
    }

    /// Per-group statistics of a view restricted to a date window.
    #[must_use]
    pub fn statistics(
        &self,
        view: &ViewSelection,
        window: &DateWindow,
        today: Date,
    ) -> Vec<GroupStatistics> {
        group_statistics(&self.filtered(view, window, today), &self.groups)
    }

    /// CSV export of a view restricted to a date window.
    ///
    /// # Errors
    /// Returns `PipelineError::Export` when the windowed series is empty,
    /// nothing is selected, or a selected group is unknown.
    pub fn export(
        &self,
        view: &ViewSelection,
        window: &DateWindow,
        today: Date,
        selected: &[&str],
    ) -> Result<String, PipelineError> {
        Ok(export_csv(&self.filtered(view, window, today), &self.groups, selected)?)
    }
}
