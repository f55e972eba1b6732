mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // --log-level wins over RUST_LOG; warn by default
    let env_filter = match args.log_level.as_deref() {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chartkit_cli=warn,chartkit_core=warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Normalize {
            input,
            output,
            pretty,
        } => commands::normalize::run(&input, output.as_deref(), pretty),
        Command::Stats { inputs, json } => commands::stats::run(&inputs, json),
    }
}
