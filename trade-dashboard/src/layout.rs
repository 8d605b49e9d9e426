//! Fixed dashboard text and element identifiers.

use serde::Serialize;

pub const PAGE_TITLE: &str = "Trade From London (1760 - 1830)";
pub const SELECTOR_LABEL: &str = "Select Commodity:";
pub const BREAKDOWN_HEADING: &str = "Sum Of All Trade";

pub const SELECTOR_ID: &str = "commodity-dropdown";
pub const TREND_CHART_ID: &str = "trade-trends-graph";
pub const PRICE_CHART_ID: &str = "commodity-value-graph";
pub const BREAKDOWN_TABLE_ID: &str = "trade-breakdown-table";

pub const YEAR_AXIS: &str = "Year";
pub const QUANTITY_AXIS: &str = "Quantity";

/// A table column: display name and the row field it reads.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub id: &'static str,
}

pub const BREAKDOWN_COLUMNS: [Column; 4] = [
    Column { name: "Port", id: "port" },
    Column { name: "Type", id: "type" },
    Column { name: "Total Value", id: "value" },
    Column { name: "Quantity", id: "quantity" },
];

pub fn trend_title(commodity: &str) -> String {
    format!("Quantity for {} by Year, Port, and Type", commodity)
}

pub fn price_title(unit: &str, commodity: &str) -> String {
    format!("Price per {} for {} by Year, and Port", unit, commodity)
}

pub fn price_axis(unit: &str) -> String {
    format!("Price Per {}", unit)
}
