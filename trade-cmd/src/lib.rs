//! Command implementations for the trade dashboard CLI.
//!
//! Every command loads the dataset first; a load failure aborts the command
//! before any selection is served.

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use std::path::Path;
use std::sync::Arc;
use trade_core::Dataset;

pub mod interactive;
pub mod show;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the selectable commodities
    Commodities {
        /// Trade CSV (plain or .gz)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,
    },

    /// Print the trend, price and breakdown views for one commodity
    Show {
        /// Trade CSV (plain or .gz)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Commodity to show (defaults to the first one in the dataset)
        #[arg(short = 'c', long)]
        commodity: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the views as JSON for one commodity, or for all of them
    Export {
        /// Trade CSV (plain or .gz)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        /// Output path for the JSON document
        #[arg(short = 'o', long)]
        output: String,

        /// Only export this commodity
        #[arg(short = 'c', long)]
        commodity: Option<String>,
    },

    /// Read one commodity per line from stdin and render each selection
    Interactive {
        /// Trade CSV (plain or .gz)
        #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
        data: String,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Commodities { data } => {
            let dataset = load_dataset(&data)?;
            print!("{}", show::run_commodities(&dataset));
            Ok(())
        }
        Command::Show {
            data,
            commodity,
            format,
        } => {
            let dataset = load_dataset(&data)?;
            print!("{}", show::run_show(dataset, commodity.as_deref(), format)?);
            Ok(())
        }
        Command::Export {
            data,
            output,
            commodity,
        } => {
            let dataset = load_dataset(&data)?;
            show::run_export(&dataset, &output, commodity.as_deref())
        }
        Command::Interactive { data, format } => {
            let dataset = load_dataset(&data)?;
            interactive::run_interactive(dataset, format).await
        }
    }
}

/// Load and clean the dataset at `path`.
pub fn load_dataset(path: &str) -> anyhow::Result<Arc<Dataset>> {
    let (dataset, report) = Dataset::load_path(Path::new(path))
        .with_context(|| format!("Failed to load trade data from {}", path))?;
    log::info!(
        "Loaded {} of {} rows from {}",
        report.rows_kept(),
        report.rows_read,
        path
    );
    Ok(Arc::new(dataset))
}
