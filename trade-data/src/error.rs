//! Recoverable, per-selection error conditions.
//!
//! None of these abort the dashboard: selection errors become user notices,
//! and ratio or unit problems degrade a single point or produce a warning.

use serde::Serialize;
use std::fmt;

/// A selection that cannot produce populated views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The dataset holds no commodities at all.
    EmptyDataset,
    /// The selected commodity is not in the commodity index.
    InvalidSelection(String),
    /// The selected commodity matched zero records.
    EmptySubset(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::EmptyDataset => write!(f, "No commodities are available in the dataset"),
            ViewError::InvalidSelection(commodity) => {
                write!(f, "'{}' is not a known commodity", commodity)
            }
            ViewError::EmptySubset(commodity) => {
                write!(f, "No trade records found for '{}'", commodity)
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// A record whose price ratio is undefined: its value is zero or the ratio is not finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UndefinedRatio {
    pub year: i32,
    pub port: String,
    pub quantity: f64,
    pub value: f64,
}

impl fmt::Display for UndefinedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Undefined price for {} in {}: quantity {} over value {}",
            self.port, self.year, self.quantity, self.value
        )
    }
}

impl std::error::Error for UndefinedRatio {}

/// Records of one commodity reporting more than one unit of measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMismatch {
    pub commodity: String,
    /// Distinct units in order of first appearance.
    pub units: Vec<String>,
}

impl fmt::Display for UnitMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data quality: '{}' is recorded in {} units ({}); price label uses '{}'",
            self.commodity,
            self.units.len(),
            self.units.join(", "),
            self.units.first().map(String::as_str).unwrap_or_default()
        )
    }
}

impl std::error::Error for UnitMismatch {}
