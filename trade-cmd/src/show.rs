//! One-shot commands: list commodities, show one selection, export JSON.

use crate::OutputFormat;
use anyhow::Context;
use log::info;
use std::sync::Arc;
use trade_core::Dataset;
use trade_dashboard::render::{render_commodity_list, render_json, render_text};
use trade_dashboard::{compute_views, Dashboard, DashboardViews, SelectionEvent};
use trade_data::{CommodityIndex, ViewError};

/// Render the commodity selector options.
pub fn run_commodities(dataset: &Dataset) -> String {
    render_commodity_list(&CommodityIndex::from_dataset(dataset))
}

/// Render the dashboard for `commodity`, or for the default commodity.
///
/// An empty dataset renders the empty selector rather than failing; an
/// unknown commodity is an error.
pub fn run_show(
    dataset: Arc<Dataset>,
    commodity: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut dashboard = Dashboard::new(dataset);
    let selected = match commodity {
        Some(commodity) => dashboard.select(commodity),
        None => dashboard.select_default(),
    };
    match selected {
        Ok(_) => {}
        Err(notice) if notice.error == ViewError::EmptyDataset => {
            return Ok(render_commodity_list(dashboard.index()));
        }
        Err(notice) => return Err(anyhow::anyhow!(notice)),
    }

    let views = dashboard
        .state()
        .rendered()
        .context("Selection produced no views")?;
    render(views, format)
}

/// Render one views bundle in the requested format.
pub fn render(views: &DashboardViews, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(views)),
        OutputFormat::Json => Ok(format!("{}\n", render_json(views)?)),
    }
}

/// Write the views for one commodity, or every commodity in index order,
/// as a JSON array to `output`.
pub fn run_export(dataset: &Dataset, output: &str, commodity: Option<&str>) -> anyhow::Result<()> {
    let index = CommodityIndex::from_dataset(dataset);
    let commodities: Vec<String> = match commodity {
        Some(commodity) => vec![index.validate(commodity)?.to_string()],
        None => index.commodities().to_vec(),
    };

    let views: Vec<DashboardViews> = commodities
        .into_iter()
        .zip(1u64..)
        .map(|(commodity, seq)| compute_views(dataset, &SelectionEvent { seq, commodity }))
        .collect();

    let json = serde_json::to_string_pretty(&views)?;
    std::fs::write(output, json).with_context(|| format!("Failed to write {}", output))?;
    info!("Exported {} commodity views to {}", views.len(), output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arc<Dataset> {
        Arc::new(Dataset::sample().unwrap())
    }

    #[test]
    fn show_defaults_to_first_commodity() {
        let text = run_show(sample(), None, OutputFormat::Text).unwrap();
        assert!(text.contains("Select Commodity: Tea\n"));
        assert!(text.contains("Quantity for Tea by Year, Port, and Type"));
    }

    #[test]
    fn show_json_is_valid() {
        let json = run_show(sample(), Some("Tobacco"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["commodity"], "Tobacco");
        assert_eq!(value["breakdown"]["rows"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn show_unknown_commodity_is_an_error() {
        let err = run_show(sample(), Some("Coffee"), OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "'Coffee' is not a known commodity");
    }

    #[test]
    fn show_empty_dataset_renders_empty_selector() {
        let text = run_show(Arc::new(Dataset::default()), None, OutputFormat::Text).unwrap();
        assert!(text.contains("(no commodities available)"));
    }

    #[test]
    fn export_writes_every_commodity() {
        let path = std::env::temp_dir().join(format!("trade_cmd_export_{}.json", std::process::id()));
        let output = path.to_string_lossy().to_string();
        run_export(&Dataset::sample().unwrap(), &output, None).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let commodities: Vec<&str> = written
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["commodity"].as_str().unwrap())
            .collect();
        assert_eq!(commodities, vec!["Tea", "Sugar", "Tobacco", "Rum", "Cotton"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn export_rejects_unknown_commodity() {
        let path = std::env::temp_dir().join("trade_cmd_export_never_written.json");
        let result = run_export(
            &Dataset::sample().unwrap(),
            &path.to_string_lossy(),
            Some("Coffee"),
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
