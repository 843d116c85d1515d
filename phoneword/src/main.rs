use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use phoneword::Cli;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so stdout only carries decompositions.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global tracing subscriber")
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose)?;

    // piped input gets no banner
    if !io::stdin().is_terminal() {
        cli.no_banner = true;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let written = phoneword::run(&cli, stdin, stdout)?;
    tracing::debug!(written, "done");
    Ok(())
}
