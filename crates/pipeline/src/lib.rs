#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/betalens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod ingest;
pub use ingest::parse_csv;

mod universe;
pub use universe::aggregate_universe;

mod sectors;
pub use sectors::{group_rows, partition_sectors};

mod views;
pub use views::BetaViews;

mod export;
pub use export::{export_csv, export_filename};

mod frame;
pub use frame::series_to_frame;

mod error;
pub use error::{ExportError, PipelineError};

/// Re-export commonly used types.
pub mod prelude {
    pub use betalens_primitives::{DateWindow, FactorGroups, SectorWeighting, ViewSelection};
    pub use betalens_traits::SeriesTransform;

    pub use super::{BetaViews, PipelineError, export_csv, export_filename};
}
