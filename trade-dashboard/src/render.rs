//! Plain-text and JSON renderings of a views bundle.
//!
//! Text output is for terminals; JSON carries the same data plus chart and
//! table configuration for an external charting front end.

use crate::layout::{self, BREAKDOWN_COLUMNS};
use crate::views::DashboardViews;
use trade_data::{group_trends, CommodityIndex, PricePoint};

/// Serialize a views bundle as pretty-printed JSON.
pub fn render_json(views: &DashboardViews) -> serde_json::Result<String> {
    serde_json::to_string_pretty(views)
}

/// The selector options, with the default selection marked.
pub fn render_commodity_list(index: &CommodityIndex) -> String {
    let mut out = format!("{}\n", layout::SELECTOR_LABEL);
    if index.is_empty() {
        out.push_str("  (no commodities available)\n");
        return out;
    }
    let default = index.default_commodity();
    for commodity in index.commodities() {
        let marker = if Some(commodity.as_str()) == default { " (default)" } else { "" };
        out.push_str(&format!("  {}{}\n", commodity, marker));
    }
    out
}

/// Render the full dashboard page as text.
pub fn render_text(views: &DashboardViews) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", layout::PAGE_TITLE));
    out.push_str(&format!("{} {}\n\n", layout::SELECTOR_LABEL, views.commodity));

    out.push_str(&format!("{}\n", views.trends.title));
    out.push_str(&format!(
        "  x: {}  y: {}\n",
        views.trends.x_label, views.trends.y_label
    ));
    let series = group_trends(&views.trends.points);
    if series.is_empty() {
        out.push_str("  (no data)\n");
    }
    for s in &series {
        let points: Vec<String> = s
            .points
            .iter()
            .map(|p| format!("{}={}", p.year, p.quantity))
            .collect();
        out.push_str(&format!("  {}: {}\n", s.label, points.join(", ")));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", views.prices.title));
    out.push_str(&format!(
        "  x: {}  y: {}\n",
        views.prices.x_label, views.prices.y_label
    ));
    let by_port = group_prices(&views.prices.points);
    if by_port.is_empty() {
        out.push_str("  (no data)\n");
    }
    for (port, points) in &by_port {
        let points: Vec<String> = points
            .iter()
            .map(|p| format!("{}={:.4}", p.year, p.price_per_unit))
            .collect();
        out.push_str(&format!("  {}: {}\n", port, points.join(", ")));
    }
    // Covers zero values and ratios that overflow alike.
    if !views.undefined_ratios.is_empty() {
        out.push_str(&format!(
            "  ({} point(s) skipped: price undefined)\n",
            views.undefined_ratios.len()
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", views.breakdown.heading));
    out.push_str(&render_breakdown_table(views));

    for notice in &views.notices {
        out.push_str(&format!("Notice: {}\n", notice));
    }
    out
}

/// The breakdown table with aligned columns.
pub fn render_breakdown_table(views: &DashboardViews) -> String {
    let rows: Vec<[String; 4]> = views
        .breakdown
        .rows
        .iter()
        .map(|r| {
            [
                r.port.clone(),
                r.trade_type.clone(),
                r.total_value.to_string(),
                r.total_quantity.to_string(),
            ]
        })
        .collect();

    let mut widths = BREAKDOWN_COLUMNS.map(|c| c.name.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = BREAKDOWN_COLUMNS
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{:<w$}", c.name, w = *w))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    if rows.is_empty() {
        out.push_str("(no data)\n");
    }
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                // Text columns left-aligned, numbers right-aligned.
                if i < 2 {
                    format!("{:<w$}", cell, w = *w)
                } else {
                    format!("{:>w$}", cell, w = *w)
                }
            })
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

fn group_prices(points: &[PricePoint]) -> Vec<(&str, Vec<&PricePoint>)> {
    let mut groups: Vec<(&str, Vec<&PricePoint>)> = Vec::new();
    for point in points {
        match groups.last_mut() {
            Some((port, members)) if *port == point.port => members.push(point),
            _ => groups.push((point.port.as_str(), vec![point])),
        }
    }
    groups
}
