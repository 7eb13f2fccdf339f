#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/betalens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod grouping;
pub use grouping::group_factors;

mod weights;
pub use weights::{normalize_weights, weighted_factor_sum};

mod standardize;
pub use standardize::{Standardized, ZScore};

mod stats;
pub use stats::{GroupStatistics, Summary, group_statistics, summarize};

mod error;
pub use error::MathError;
