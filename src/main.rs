//! Entry point: parse CLI, set up logging and run the collection.

use std::time::Duration;

use clap::Parser;
use nba_rosters::{
    cli::Rosters,
    commands::collect_rosters::{handle_collect_rosters, CollectParams},
};
use tracing_subscriber::EnvFilter;

/// Log to stdout; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "nba_rosters=debug"
    } else {
        "nba_rosters=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Rosters::parse();
    init_tracing(app.verbose);

    handle_collect_rosters(CollectParams {
        base_url: app.base_url,
        output: app.output,
        format: app.format,
        timeout: app.timeout_secs.map(Duration::from_secs),
    })
    .await?;

    Ok(())
}
