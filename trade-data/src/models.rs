//! Derived view rows.
//!
//! All structs derive `Serialize` so an external chart or table renderer
//! can consume them as JSON.

use crate::error::UndefinedRatio;
use serde::Serialize;

/// One quantity observation on the trend chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub quantity: f64,
    /// `"<port> (<type>)"`, one line per label.
    pub series_label: String,
}

/// Consecutive trend points sharing a label.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendSeries {
    pub label: String,
    pub points: Vec<TrendPoint>,
}

/// One point on the unit-price chart, one line per port.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricePoint {
    pub year: i32,
    /// quantity / value for the record.
    pub price_per_unit: f64,
    pub port: String,
}

/// The unit-price chart data for one commodity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceSeries {
    /// Unit of the first record, or [`crate::PLACEHOLDER_UNIT`] when empty.
    pub unit_label: String,
    pub points: Vec<PricePoint>,
    /// Records left out because their ratio is undefined.
    pub undefined: Vec<UndefinedRatio>,
}

/// Totals for one (port, type) group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BreakdownRow {
    pub port: String,
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(rename = "value")]
    pub total_value: f64,
    #[serde(rename = "quantity")]
    pub total_quantity: f64,
}
