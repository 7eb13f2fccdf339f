//! Error types for the view pipeline.

use betalens_math::MathError;

/// Errors returned when building or exporting views.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Non-empty input produced no usable rows.
    #[error("no valid rows in input ({lines} data lines read)")]
    NoValidRows {
        /// Number of non-empty data lines after the header.
        lines: usize,
    },

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Errors raised by CSV export.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The series to export has no rows.
    #[error("no data to export")]
    EmptySeries,

    /// No factor group was selected.
    #[error("no factor groups selected")]
    NoGroupsSelected,

    /// A selected name is not in the group table.
    #[error("unknown factor group: {0}")]
    UnknownGroup(String),
}
