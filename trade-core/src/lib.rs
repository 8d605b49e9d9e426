//! Core record types and CSV loading for the London trade dataset.
//!
//! The dataset is read once at startup, cleaned of zero-quantity rows and
//! then shared read-only with every consumer.

pub mod dataset;
pub mod error;
pub mod record;

pub use dataset::{Dataset, LoadReport};
pub use error::LoadError;
pub use record::{TradeRecord, REQUIRED_COLUMNS};

/// Embedded sample of the trade CSV (London, Bristol, Liverpool and Glasgow, 1765-1830).
pub static SAMPLE_CSV: &str = include_str!("../../fixtures/trade_sample.csv");
