//! Beta row type definitions.

use serde::{Deserialize, Serialize};

use crate::{Date, FactorGroups, parse_date};

/// Number of raw factor values a row must carry.
pub const FACTOR_COUNT: usize = 88;

/// One parsed CSV row: a sector's factor betas on a date.
///
/// `values` holds at least [`FACTOR_COUNT`] entries; trailing extras are
/// kept but ignored downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Date column, exactly as it appeared in the file.
    pub date: String,
    /// Sector name.
    pub sector: String,
    /// Sector weight in the universe.
    pub sector_weight: f64,
    /// Raw factor values, index 0 is factor 1.
    pub values: Vec<f64>,
}

impl RawRow {
    /// Create a new raw row.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        sector: impl Into<String>,
        sector_weight: f64,
        values: Vec<f64>,
    ) -> Self {
        Self { date: date.into(), sector: sector.into(), sector_weight, values }
    }

    /// Parse the date column.
    #[must_use]
    pub fn parsed_date(&self) -> Option<Date> {
        parse_date(&self.date)
    }

    /// Value of a 1-based factor index, 0.0 when absent.
    #[must_use]
    pub fn factor(&self, index: usize) -> f64 {
        index.checked_sub(1).and_then(|i| self.values.get(i)).copied().unwrap_or(0.0)
    }

    /// The first [`FACTOR_COUNT`] values.
    #[must_use]
    pub fn factors(&self) -> &[f64] {
        &self.values[..self.values.len().min(FACTOR_COUNT)]
    }
}

/// Group averages for a single date, one value per group in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    /// Row date.
    pub date: Date,
    /// Group values aligned with the [`FactorGroups`] table that produced them.
    pub values: Vec<f64>,
}

impl GroupedRow {
    /// Create a new grouped row.
    #[must_use]
    pub const fn new(date: Date, values: Vec<f64>) -> Self {
        Self { date, values }
    }

    /// Value at a group position, 0.0 when out of range.
    #[must_use]
    pub fn value(&self, position: usize) -> f64 {
        self.values.get(position).copied().unwrap_or(0.0)
    }

    /// Value for a group name.
    #[must_use]
    pub fn get(&self, groups: &FactorGroups, name: &str) -> Option<f64> {
        groups.position(name).and_then(|p| self.values.get(p).copied())
    }

    /// Multiply every group value by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        for v in &mut self.values {
            *v *= factor;
        }
        self
    }
}
