//! Summary table: total value and quantity per (port, type).

use crate::filter::FilteredSubset;
use crate::models::BreakdownRow;
use std::collections::BTreeMap;

/// Sum `value` and `quantity` for every (port, type) in the subset.
///
/// Rows are ordered by port, then type. An empty subset yields no rows.
pub fn build_breakdown(subset: &FilteredSubset<'_>) -> Vec<BreakdownRow> {
    let mut totals: BTreeMap<(&str, &str), (f64, f64)> = BTreeMap::new();
    for record in subset.iter() {
        let entry = totals
            .entry((record.port.as_str(), record.trade_type.as_str()))
            .or_insert((0.0, 0.0));
        entry.0 += record.value;
        entry.1 += record.quantity;
    }

    let rows: Vec<BreakdownRow> = totals
        .into_iter()
        .map(|((port, trade_type), (total_value, total_quantity))| BreakdownRow {
            port: port.to_string(),
            trade_type: trade_type.to_string(),
            total_value,
            total_quantity,
        })
        .collect();
    log::debug!(
        "[Trade Debug] pipeline: build_breakdown '{}' returned {} rows",
        subset.commodity(),
        rows.len()
    );
    rows
}
