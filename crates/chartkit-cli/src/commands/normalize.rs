//! Normalize command implementation.

use anyhow::Result;
use tracing::info;

use crate::cli_utils::{load_chart, write_output};

/// Run the normalize command
pub fn run(input: &str, output: Option<&str>, pretty: bool) -> Result<()> {
    let chart = load_chart(input)?;
    info!("Normalized {} notes from {}", chart.len(), input);

    let content = if pretty {
        serde_json::to_string_pretty(&chart.to_records())?
    } else {
        chart.to_json()?
    };
    write_output(output, &content)
}
