#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/betalens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::{DEFAULT_QUOTE_URL, DEFAULT_SYMBOL, PriceConfig};

mod client;
pub use client::{YahooChartClient, parse_chart};

mod align;
pub use align::{
    PriceOverlay, combine_and_normalize, fetch_prices_for_dates, nearest_price, overlay_prices,
};

mod error;
pub use error::PriceError;
