//! Derivation pipeline for the trade dashboard.
//!
//! Every function here is pure: it borrows the loaded [`Dataset`] (or a
//! [`FilteredSubset`] of it) and returns freshly allocated view rows.
//! Nothing is cached and nothing is mutated, so repeated or concurrent
//! calls always observe the same result.
//!
//! Data flow for one selection:
//! 1. [`filter`] picks the records of the selected commodity.
//! 2. [`build_trends`], [`build_prices`] and [`build_breakdown`] each
//!    derive one view from that subset, independently of one another.
//!
//! [`Dataset`]: trade_core::Dataset

pub mod breakdown;
pub mod error;
pub mod filter;
pub mod index;
pub mod models;
pub mod prices;
pub mod trends;

pub use breakdown::build_breakdown;
pub use error::{UndefinedRatio, UnitMismatch, ViewError};
pub use filter::{filter, FilteredSubset};
pub use index::CommodityIndex;
pub use models::{BreakdownRow, PricePoint, PriceSeries, TrendPoint, TrendSeries};
pub use prices::{build_prices, check_units, PLACEHOLDER_UNIT};
pub use trends::{build_trends, group_trends, series_label};
