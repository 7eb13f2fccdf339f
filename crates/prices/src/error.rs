//! Error types for the quote-history client.

use betalens_traits::SourceError;
use thiserror::Error;

/// Errors raised while fetching or decoding daily prices.
#[derive(Debug, Error)]
pub enum PriceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("failed to parse chart response: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL cannot carry the chart path.
    #[error("invalid chart URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP status.
    #[error("quote endpoint returned HTTP {0}")]
    Status(u16),

    /// The payload lacks a required part of the chart structure.
    #[error("chart response missing {0}")]
    MissingField(&'static str),
}

impl From<PriceError> for SourceError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::Status(code) => Self::Status(code),
            PriceError::Request(err) => Self::Transport(err.to_string()),
            err @ PriceError::InvalidUrl(_) => Self::Transport(err.to_string()),
            err @ (PriceError::Json(_) | PriceError::MissingField(_)) => {
                Self::Malformed(err.to_string())
            }
        }
    }
}
