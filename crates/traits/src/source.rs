//! Daily price source trait definitions.

use std::future::Future;

use betalens_primitives::{Date, PricePoint};

/// Errors a price source can report.
///
/// Callers that overlay prices degrade every variant to an empty series.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Non-success HTTP status.
    #[error("price source returned status {0}")]
    Status(u16),

    /// Payload did not have the expected shape.
    #[error("malformed price payload: {0}")]
    Malformed(String),

    /// Network or transport failure.
    #[error("price source transport error: {0}")]
    Transport(String),
}

/// Source of daily closing prices for a single instrument.
pub trait PriceSource: Send + Sync {
    /// Fetch every daily close between `start` and `end` inclusive in one request.
    ///
    /// # Errors
    /// Returns `SourceError` on transport failure, non-success status or a
    /// malformed payload.
    fn fetch_daily(
        &self,
        start: Date,
        end: Date,
    ) -> impl Future<Output = Result<Vec<PricePoint>, SourceError>> + Send;
}
