//! Unit-price series, one line per port.
//!
//! The plotted ratio is `quantity / value`, the orientation the dashboard has
//! always charted under its "Price Per <unit>" axis. Do not invert it without
//! changing the chart's meaning.

use crate::error::{UndefinedRatio, UnitMismatch};
use crate::filter::FilteredSubset;
use crate::models::{PricePoint, PriceSeries};
use trade_core::TradeRecord;

/// Unit label reported when the subset is empty.
pub const PLACEHOLDER_UNIT: &str = "unit";

/// Ratio plotted for one record, or why it cannot be plotted.
pub fn price_per_unit(record: &TradeRecord) -> Result<f64, UndefinedRatio> {
    let ratio = record.quantity / record.value;
    if record.value == 0.0 || !ratio.is_finite() {
        return Err(UndefinedRatio {
            year: record.year,
            port: record.port.clone(),
            quantity: record.quantity,
            value: record.value,
        });
    }
    Ok(ratio)
}

/// Build the unit-price series for a subset.
///
/// Precondition: all records of a commodity share one unit. The label is
/// taken from the first record; [`check_units`] reports violations, and
/// debug builds log them as a data-quality warning.
///
/// Points are ordered by port, then year. Records with an undefined ratio
/// are left out and listed in [`PriceSeries::undefined`].
pub fn build_prices(subset: &FilteredSubset<'_>) -> PriceSeries {
    let unit_label = subset
        .first()
        .map(|r| r.unit.clone())
        .unwrap_or_else(|| PLACEHOLDER_UNIT.to_string());

    if cfg!(debug_assertions) {
        if let Err(mismatch) = check_units(subset) {
            log::warn!("[Trade Debug] pipeline: {}", mismatch);
        }
    }

    let mut points = Vec::with_capacity(subset.len());
    let mut undefined = Vec::new();
    for record in subset.iter() {
        match price_per_unit(record) {
            Ok(price_per_unit) => points.push(PricePoint {
                year: record.year,
                price_per_unit,
                port: record.port.clone(),
            }),
            Err(e) => {
                log::warn!("[Trade Debug] pipeline: {}", e);
                undefined.push(e);
            }
        }
    }
    points.sort_by(|a, b| a.port.cmp(&b.port).then(a.year.cmp(&b.year)));

    log::debug!(
        "[Trade Debug] pipeline: build_prices '{}' returned {} points, skipped {}",
        subset.commodity(),
        points.len(),
        undefined.len()
    );
    PriceSeries {
        unit_label,
        points,
        undefined,
    }
}

/// Verify that every record in the subset uses the same unit.
pub fn check_units(subset: &FilteredSubset<'_>) -> Result<(), UnitMismatch> {
    let mut units: Vec<String> = Vec::new();
    for record in subset.iter() {
        if !units.contains(&record.unit) {
            units.push(record.unit.clone());
        }
    }
    if units.len() > 1 {
        return Err(UnitMismatch {
            commodity: subset.commodity().to_string(),
            units,
        });
    }
    Ok(())
}
