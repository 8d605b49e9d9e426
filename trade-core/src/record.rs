use serde::{Deserialize, Serialize};

/// Header names every trade CSV must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "year",
    "port",
    "type",
    "commodity",
    "unit",
    "quantity",
    "value",
];

/// One row of the historical trade dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub year: i32,
    pub port: String,
    /// Trade direction, e.g. `import` or `export`.
    #[serde(rename = "type")]
    pub trade_type: String,
    pub commodity: String,
    /// Unit of measure for `quantity` (lbs, cwt, gallons, ...).
    pub unit: String,
    pub quantity: f64,
    /// Monetary total for the row.
    pub value: f64,
}

impl TradeRecord {
    pub fn new(
        year: i32,
        port: &str,
        trade_type: &str,
        commodity: &str,
        unit: &str,
        quantity: f64,
        value: f64,
    ) -> Self {
        Self {
            year,
            port: port.to_string(),
            trade_type: trade_type.to_string(),
            commodity: commodity.to_string(),
            unit: unit.to_string(),
            quantity,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TradeRecord;

    #[test]
    fn deserializes_type_column_into_trade_type() {
        let csv_data = "\
year,port,type,commodity,unit,quantity,value
1780,London,import,Tea,lbs,100,50
";
        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let records: Vec<TradeRecord> = rdr
            .deserialize::<TradeRecord>()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            TradeRecord::new(1780, "London", "import", "Tea", "lbs", 100.0, 50.0)
        );
    }
}
