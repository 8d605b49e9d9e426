//! Trade CLI - explore commodity trends, unit prices and port breakdowns
//! of the London trade dataset from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "trade-cli",
    version,
    about = "Trade From London (1760 - 1830) data explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: trade_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting trade-cli");
    trade_cmd::run(cli.command).await
}
