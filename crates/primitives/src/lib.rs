#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/betalens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod date;
pub use date::{parse_date, today, week_start};

mod error;
pub use error::PrimitivesError;

mod factor;
pub use factor::{FactorGroup, FactorGroups, UNKNOWN_CATEGORY};

mod price;
pub use price::{AlignedPoint, PricePoint};

mod row;
pub use row::{FACTOR_COUNT, GroupedRow, RawRow};

mod window;
pub use window::{DateWindow, RelativePreset, SectorWeighting, ViewSelection, WindowBounds};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;

/// Date-ordered sequence of grouped rows, at most one row per date once aggregated.
pub type SeriesByDate = Vec<GroupedRow>;

/// Per-sector series keyed by the sector names observed in the input.
pub type SectorSeriesMap = std::collections::BTreeMap<String, SeriesByDate>;
