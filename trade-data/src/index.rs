use crate::error::ViewError;
use std::collections::HashSet;
use trade_core::Dataset;

/// The distinct commodities of a dataset, in order of first appearance.
///
/// The order is fixed for the life of the dataset and drives both the
/// selector options and the default selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommodityIndex {
    commodities: Vec<String>,
    lookup: HashSet<String>,
}

impl CommodityIndex {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut index = Self::default();
        for record in dataset {
            if index.lookup.insert(record.commodity.clone()) {
                index.commodities.push(record.commodity.clone());
            }
        }
        if index.is_empty() {
            log::warn!("[Trade Debug] index: Dataset has no commodities");
        } else {
            log::info!(
                "[Trade Debug] index: {} commodities, default '{}'",
                index.len(),
                index.commodities[0]
            );
        }
        index
    }

    pub fn commodities(&self) -> &[String] {
        &self.commodities
    }

    /// The first commodity, if any.
    pub fn default_commodity(&self) -> Option<&str> {
        self.commodities.first().map(String::as_str)
    }

    pub fn contains(&self, commodity: &str) -> bool {
        self.lookup.contains(commodity)
    }

    /// Check a selection against the index.
    pub fn validate<'s>(&self, commodity: &'s str) -> Result<&'s str, ViewError> {
        if self.is_empty() {
            Err(ViewError::EmptyDataset)
        } else if !self.contains(commodity) {
            Err(ViewError::InvalidSelection(commodity.to_string()))
        } else {
            Ok(commodity)
        }
    }

    pub fn len(&self) -> usize {
        self.commodities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commodities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_dataset;

    #[test]
    fn commodities_in_first_appearance_order() {
        let index = CommodityIndex::from_dataset(&sample_dataset());
        assert_eq!(
            index.commodities(),
            &["Tea", "Sugar", "Tobacco", "Rum", "Cotton"]
        );
        assert_eq!(index.default_commodity(), Some("Tea"));
    }

    #[test]
    fn index_is_stable_across_calls() {
        let dataset = sample_dataset();
        assert_eq!(
            CommodityIndex::from_dataset(&dataset),
            CommodityIndex::from_dataset(&dataset)
        );
    }

    #[test]
    fn empty_dataset_has_no_default() {
        let index = CommodityIndex::from_dataset(&Dataset::default());
        assert!(index.is_empty());
        assert_eq!(index.default_commodity(), None);
        assert_eq!(index.validate("Tea"), Err(ViewError::EmptyDataset));
    }

    #[test]
    fn validate_rejects_unknown_commodity() {
        let index = CommodityIndex::from_dataset(&sample_dataset());
        assert_eq!(index.validate("Rum"), Ok("Rum"));
        assert_eq!(
            index.validate("Coffee"),
            Err(ViewError::InvalidSelection("Coffee".to_string()))
        );
        assert!(!index.contains("tea"), "Matching is case-sensitive");
    }
}
