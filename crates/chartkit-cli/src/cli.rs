//! CLI argument definitions for chartkit.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chartkit")]
#[command(about = "Rhythm-game chart normalizer and analyzer", version)]
pub struct Args {
    /// Log filter directive (e.g. "debug", "chartkit_core=trace")
    #[arg(long, global = true, env = "CHARTKIT_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw chart and write its canonical records
    Normalize {
        /// Chart JSON file ("-" for stdin)
        input: String,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show statistics for one or more charts
    Stats {
        /// Chart JSON files ("-" for stdin)
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Output one JSON object per chart
        #[arg(long)]
        json: bool,
    },
}
