//! View and date-window selectors.

use chrono::{Datelike, Days, Months};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Trailing window measured back from today in calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RelativePreset {
    /// Last calendar month.
    #[display("month")]
    OneMonth,
    /// Last six calendar months.
    #[display("6months")]
    SixMonths,
    /// Last calendar year.
    #[display("year")]
    OneYear,
    /// Last two calendar years.
    #[display("2years")]
    TwoYears,
    /// Last three calendar years.
    #[display("3years")]
    ThreeYears,
}

impl RelativePreset {
    /// Length of the window in calendar months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::TwoYears => 24,
            Self::ThreeYears => 36,
        }
    }

    /// First day of the window ending on `today`.
    ///
    /// A day past the end of the target month rolls into the next month, so
    /// 2024-08-31 minus six months is 2024-03-02 (February 31st).
    #[must_use]
    pub fn start_from(self, today: Date) -> Date {
        let Some(clamped) = today.checked_sub_months(Months::new(self.months())) else {
            return Date::MIN;
        };
        let overflow = today.day() - clamped.day();
        clamped.checked_add_days(Days::new(u64::from(overflow))).unwrap_or(clamped)
    }
}

/// Inclusive date bounds; `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowBounds {
    /// Earliest retained date.
    pub start: Option<Date>,
    /// Latest retained date.
    pub end: Option<Date>,
}

impl WindowBounds {
    /// Whether `date` falls inside the bounds.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// Date window applied to a displayed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateWindow {
    /// No filtering.
    #[default]
    All,
    /// Trailing window ending today.
    Preset(RelativePreset),
    /// Explicit window; a missing end defaults to today, a missing start is unbounded.
    Custom {
        /// First retained date.
        start: Option<Date>,
        /// Last retained date.
        end: Option<Date>,
    },
}

impl DateWindow {
    /// Resolve to concrete bounds relative to `today`.
    #[must_use]
    pub fn bounds(&self, today: Date) -> WindowBounds {
        match *self {
            Self::All => WindowBounds::default(),
            Self::Preset(preset) => {
                WindowBounds { start: Some(preset.start_from(today)), end: Some(today) }
            }
            Self::Custom { start, end } => WindowBounds { start, end: Some(end.unwrap_or(today)) },
        }
    }

    /// Explicit end date of a custom window.
    #[must_use]
    pub const fn custom_end(&self) -> Option<Date> {
        match *self {
            Self::Custom { end, .. } => end,
            _ => None,
        }
    }

    /// Short descriptor used in export filenames.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match *self {
            Self::All => "all".to_string(),
            Self::Preset(preset) => preset.to_string(),
            Self::Custom { start: Some(start), end: Some(end) } => {
                format!("custom_{start}_to_{end}")
            }
            Self::Custom { .. } => "custom".to_string(),
        }
    }
}

/// How a sector breakdown scales its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum SectorWeighting {
    /// Group values multiplied by the row's own sector weight.
    #[display("weighted")]
    Weighted,
    /// Group values as computed from the raw row.
    #[display("unweighted")]
    Unweighted,
}

/// Which series is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewSelection {
    /// Sector-weighted aggregate across all sectors.
    #[default]
    Universe,
    /// A single sector's breakdown.
    Sector {
        /// Sector name as it appears in the input.
        name: String,
        /// Weighted or unweighted variant.
        weighting: SectorWeighting,
    },
}

impl ViewSelection {
    /// Select a sector breakdown.
    #[must_use]
    pub fn sector(name: impl Into<String>, weighting: SectorWeighting) -> Self {
        Self::Sector { name: name.into(), weighting }
    }

    /// Sector name, if this is a sector view.
    #[must_use]
    pub fn sector_name(&self) -> Option<&str> {
        match self {
            Self::Universe => None,
            Self::Sector { name, .. } => Some(name),
        }
    }

    /// Short descriptor used in export filenames.
    #[must_use]
    pub fn descriptor(&self) -> String {
        match self {
            Self::Universe => "universe_weighted".to_string(),
            Self::Sector { name, weighting } => {
                let slug: String = name
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("_")
                    .chars()
                    .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
                    .collect();
                format!("sector_{slug}_{weighting}")
            }
        }
    }
}
