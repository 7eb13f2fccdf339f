//! Series transformation trait definitions.

use betalens_primitives::GroupedRow;

/// Pure transformation of a grouped series.
///
/// Implementations never mutate their input and hold no state between calls.
pub trait SeriesTransform: Send + Sync {
    /// Transform a series.
    ///
    /// # Arguments
    /// * `series` - Grouped rows, ascending by date
    ///
    /// # Returns
    /// A new series, ascending by date.
    fn transform(&self, series: &[GroupedRow]) -> Vec<GroupedRow>;

    /// Returns the name of this transformation.
    fn name(&self) -> &str;
}
