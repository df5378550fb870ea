//! `tessera`: drive the built-in resolver tree from the command line.
//!
//! Outcomes are printed to stdout as JSON lines; logs go to stderr.

mod cli;
mod commands;
mod config;

use anyhow::Context as _;
use clap::Parser;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = config::load(&cli.overrides()).context("failed to load configuration")?;
    let _guard =
        tessera_log::init_with(settings.log.clone()).context("failed to initialize logging")?;
    tracing::debug!(?settings, "configuration loaded");

    let mut out = std::io::stdout();
    match cli.command {
        Command::Resolve(args) => commands::resolve(args.node, &mut out).await,
        Command::Watch(args) => commands::watch(args.node, settings.take, &mut out).await,
    }
}
