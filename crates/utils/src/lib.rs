#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/betalens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod resample;
pub use resample::{WeeklyResampler, weekly_averages};

mod filter;
pub use filter::{DateRangeFilter, filter_by_window};

mod rank;
pub use rank::{FactorChange, RankerConfig, top_changes};
