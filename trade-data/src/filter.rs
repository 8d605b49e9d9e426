use trade_core::{Dataset, TradeRecord};

/// The records of one commodity, borrowed from the dataset.
///
/// Built fresh for every selection and dropped once the views are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSubset<'a> {
    commodity: String,
    records: Vec<&'a TradeRecord>,
}

/// Select every record whose commodity equals `commodity` exactly.
///
/// An unknown commodity yields an empty subset, not an error.
pub fn filter<'a>(dataset: &'a Dataset, commodity: &str) -> FilteredSubset<'a> {
    let records: Vec<&TradeRecord> = dataset
        .iter()
        .filter(|r| r.commodity == commodity)
        .collect();
    log::debug!(
        "[Trade Debug] pipeline: filter '{}' matched {} of {} records",
        commodity,
        records.len(),
        dataset.len()
    );
    FilteredSubset {
        commodity: commodity.to_string(),
        records,
    }
}

impl<'a> FilteredSubset<'a> {
    pub fn commodity(&self) -> &str {
        &self.commodity
    }

    pub fn records(&self) -> &[&'a TradeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TradeRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn first(&self) -> Option<&'a TradeRecord> {
        self.records.first().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
