use std::io::{self, Write};

use clap::Parser;
use merge_sort::cli::Cli;
use merge_sort::demo;
use merge_sort::logging::init_logging;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging_config())?;

    let options = cli.sort_options();
    info!(strategy = ?cli.strategy, variant = ?cli.variant, ?options, "starting demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, cli.variant, cli.strategy, &options)?;
    out.flush()?;

    info!("demo finished");
    Ok(())
}
