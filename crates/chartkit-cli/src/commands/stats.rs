//! Stats command implementation.

use anyhow::{Result, bail};
use chartkit_core::{Chart, Statistics};
use serde::Serialize;
use tracing::error;

use crate::cli_utils::load_chart;

/// Statistics for one input, as printed by the stats command
#[derive(Debug, Serialize)]
pub struct StatsReport<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub stats: Statistics,
    pub sp_rhythm: bool,
}

impl<'a> StatsReport<'a> {
    pub fn new(input: &'a str, chart: &Chart) -> Self {
        Self {
            input,
            stats: chart.analyze(),
            sp_rhythm: chart.is_sp_rhythm(),
        }
    }
}

/// Run the stats command.
///
/// Every input is processed; a failing chart is logged and counted, and the
/// command fails at the end if any chart could not be loaded.
pub fn run(inputs: &[String], json: bool) -> Result<()> {
    let mut failures = 0usize;

    for input in inputs {
        let chart = match load_chart(input) {
            Ok(chart) => chart,
            Err(e) => {
                error!("{:#}", e);
                failures += 1;
                continue;
            }
        };

        let report = StatsReport::new(input, &chart);
        if json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("{}", format_report(&report));
        }
    }

    if failures > 0 {
        bail!("{} of {} charts failed to load", failures, inputs.len());
    }
    Ok(())
}

pub fn format_report(report: &StatsReport<'_>) -> String {
    let stats = &report.stats;
    [
        report.input.to_string(),
        format!("  Duration:  {}", format_duration(stats.duration)),
        format!("  Notes:     {}", stats.notes),
        format!("  BPM:       {}", format_bpm_range(stats)),
        format!("  Main BPM:  {}", stats.main_bpm),
        format!(
            "  SP rhythm: {}",
            if report.sp_rhythm { "yes" } else { "no" }
        ),
    ]
    .join("\n")
}

/// `m:ss.ss`
fn format_duration(seconds: f64) -> String {
    // Round to hundredths first so 59.999 carries into the minute
    let centis = (seconds * 100.0).round() as u64;
    format!("{}:{:02}.{:02}", centis / 6000, centis % 6000 / 100, centis % 100)
}

fn format_bpm_range(stats: &Statistics) -> String {
    if stats.has_tempo_changes() {
        format!("{}-{}", stats.min_bpm(), stats.max_bpm())
    } else {
        stats.min_bpm().to_string()
    }
}
