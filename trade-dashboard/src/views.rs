//! The three derived views for one selection, with their chart and table text.

use crate::dispatch::SelectionEvent;
use crate::layout::{self, Column};
use serde::Serialize;
use std::thread;
use trade_core::Dataset;
use trade_data::{
    build_breakdown, build_prices, build_trends, check_units, filter, BreakdownRow, PricePoint,
    PriceSeries, TrendPoint, UndefinedRatio, ViewError, PLACEHOLDER_UNIT,
};

/// A line chart ready to hand to a renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartView<P> {
    pub id: &'static str,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<P>,
}

/// The breakdown table ready to hand to a renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableView {
    pub id: &'static str,
    pub heading: &'static str,
    pub columns: Vec<Column>,
    pub rows: Vec<BreakdownRow>,
}

/// Everything rendered for one selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardViews {
    /// Sequence number of the selection event that produced these views.
    pub seq: u64,
    pub commodity: String,
    pub unit_label: String,
    pub trends: ChartView<TrendPoint>,
    pub prices: ChartView<PricePoint>,
    pub breakdown: TableView,
    /// Price points left out because value was zero.
    pub undefined_ratios: Vec<UndefinedRatio>,
    /// User-visible notices (empty selection, data-quality warnings).
    pub notices: Vec<String>,
}

impl DashboardViews {
    /// True when none of the three views has any data.
    pub fn is_empty(&self) -> bool {
        self.trends.points.is_empty()
            && self.prices.points.is_empty()
            && self.breakdown.rows.is_empty()
    }
}

/// Derive all three views for a selection.
///
/// The commodity is filtered once; the three builders then run on scoped
/// threads over the shared subset. A builder that panics degrades to an
/// empty view with a notice instead of taking the dashboard down.
pub fn compute_views(dataset: &Dataset, event: &SelectionEvent) -> DashboardViews {
    let subset = filter(dataset, &event.commodity);
    let mut notices = Vec::new();

    if subset.is_empty() {
        let e = ViewError::EmptySubset(event.commodity.clone());
        log::warn!("[Trade Debug] views: {}", e);
        notices.push(e.to_string());
    }
    if let Err(mismatch) = check_units(&subset) {
        notices.push(mismatch.to_string());
    }

    let (trends, prices, breakdown) = thread::scope(|s| {
        let trends = s.spawn(|| build_trends(&subset));
        let prices = s.spawn(|| build_prices(&subset));
        let breakdown = s.spawn(|| build_breakdown(&subset));
        (trends.join(), prices.join(), breakdown.join())
    });

    let trends = trends.unwrap_or_else(|_| {
        log::error!("[Trade Debug] views: trend builder panicked");
        notices.push("Trend chart unavailable".to_string());
        Vec::new()
    });
    let prices = prices.unwrap_or_else(|_| {
        log::error!("[Trade Debug] views: price builder panicked");
        notices.push("Price chart unavailable".to_string());
        PriceSeries {
            unit_label: PLACEHOLDER_UNIT.to_string(),
            points: Vec::new(),
            undefined: Vec::new(),
        }
    });
    let breakdown = breakdown.unwrap_or_else(|_| {
        log::error!("[Trade Debug] views: breakdown builder panicked");
        notices.push("Breakdown table unavailable".to_string());
        Vec::new()
    });

    let PriceSeries {
        unit_label,
        points: price_points,
        undefined,
    } = prices;

    DashboardViews {
        seq: event.seq,
        commodity: event.commodity.clone(),
        trends: ChartView {
            id: layout::TREND_CHART_ID,
            title: layout::trend_title(&event.commodity),
            x_label: layout::YEAR_AXIS.to_string(),
            y_label: layout::QUANTITY_AXIS.to_string(),
            points: trends,
        },
        prices: ChartView {
            id: layout::PRICE_CHART_ID,
            title: layout::price_title(&unit_label, &event.commodity),
            x_label: layout::YEAR_AXIS.to_string(),
            y_label: layout::price_axis(&unit_label),
            points: price_points,
        },
        breakdown: TableView {
            id: layout::BREAKDOWN_TABLE_ID,
            heading: layout::BREAKDOWN_HEADING,
            columns: layout::BREAKDOWN_COLUMNS.to_vec(),
            rows: breakdown,
        },
        unit_label,
        undefined_ratios: undefined,
        notices,
    }
}
