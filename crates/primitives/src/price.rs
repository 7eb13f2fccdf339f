//! Price series types.

use serde::{Deserialize, Serialize};

use crate::{Date, GroupedRow};

/// A daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: Date,
    /// Closing price.
    pub price: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[must_use]
    pub const fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// A series row paired with its nearest matched price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Date of the series row.
    pub date: Date,
    /// Matched closing price.
    pub price: f64,
    /// Z-scored price multiplied by the overlay scale factor.
    pub standardized_price: f64,
    /// The series row the price was matched to.
    pub source: GroupedRow,
}
