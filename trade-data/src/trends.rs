//! Quantity-over-time series, one line per (port, type).

use crate::filter::FilteredSubset;
use crate::models::{TrendPoint, TrendSeries};
use std::collections::BTreeMap;
use trade_core::TradeRecord;

/// Series label for a (port, type) group: `"<port> (<type>)"`.
pub fn series_label(port: &str, trade_type: &str) -> String {
    format!("{} ({})", port, trade_type)
}

/// Build the trend points for a subset.
///
/// Groups are ordered by (port, type); points within a group by year, with
/// rows of the same year kept in input order. Rows are plotted as-is, so
/// duplicate (year, port, type) rows show up as separate points.
pub fn build_trends(subset: &FilteredSubset<'_>) -> Vec<TrendPoint> {
    let mut groups: BTreeMap<(&str, &str), Vec<&TradeRecord>> = BTreeMap::new();
    for record in subset.iter() {
        groups
            .entry((record.port.as_str(), record.trade_type.as_str()))
            .or_default()
            .push(record);
    }

    let mut points = Vec::with_capacity(subset.len());
    for ((port, trade_type), mut records) in groups {
        records.sort_by_key(|r| r.year);
        let label = series_label(port, trade_type);
        points.extend(records.into_iter().map(|r| TrendPoint {
            year: r.year,
            quantity: r.quantity,
            series_label: label.clone(),
        }));
    }
    log::debug!(
        "[Trade Debug] pipeline: build_trends '{}' returned {} points",
        subset.commodity(),
        points.len()
    );
    points
}

/// Split an ordered trend sequence into one series per label.
pub fn group_trends(points: &[TrendPoint]) -> Vec<TrendSeries> {
    let mut series: Vec<TrendSeries> = Vec::new();
    for point in points {
        match series.last_mut() {
            Some(current) if current.label == point.series_label => {
                current.points.push(point.clone())
            }
            _ => series.push(TrendSeries {
                label: point.series_label.clone(),
                points: vec![point.clone()],
            }),
        }
    }
    series
}
