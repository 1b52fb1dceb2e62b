use clap::Parser;

use pizzeria::cli::{run, Cli};
use pizzeria::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli).await
}
