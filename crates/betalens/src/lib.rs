//! # betalens
//!
//! Weekly factor-group views of sector beta exposures.
//!
//! This crate provides a unified interface to the betalens crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Rows, factor groups, windows and view selections
//! - `traits`: Series transform and price source abstractions
//! - `math`: Grouping, weighting, standardization and statistics kernels
//! - `utils`: Weekly resampling, date filtering and change ranking
//! - `pipeline`: CSV ingestion, view assembly, export and polars interop
//! - `prices`: Market index fetch and overlay alignment
//!
//! ## Example
//!
//! ```rust,ignore
//! use betalens::pipeline::BetaViews;
//! use betalens::primitives::{FactorGroups, ViewSelection};
//!
//! let views = BetaViews::from_csv(&text, FactorGroups::reference())?;
//! let universe = views.series(&ViewSelection::Universe);
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use betalens_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use betalens_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use betalens_math as math;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use betalens_utils as utils;
#[cfg(feature = "pipeline")]
#[doc(inline)]
pub use betalens_pipeline as pipeline;
#[cfg(feature = "prices")]
#[doc(inline)]
pub use betalens_prices as prices;
