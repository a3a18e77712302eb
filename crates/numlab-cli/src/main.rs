//! numlab - run and verify the worked demonstrations.
//!
//! Reports go to stdout; logs go to stderr and follow `RUST_LOG`
//! (default `numlab=info`, or `numlab=debug` with `--verbose`).

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numlab_cli::{load_tolerances, run, Cli};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "numlab=debug" } else { "numlab=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let tolerances = load_tolerances(cli.config.as_deref())?;
    info!(command = ?cli.command, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, &tolerances, &mut out)?;
    out.flush()?;
    Ok(())
}
