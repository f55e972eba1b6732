//! Common CLI utility functions shared across commands.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use chartkit_core::Chart;
use tracing::debug;

/// Input name that reads from stdin
pub const STDIN: &str = "-";

/// Read a chart document from a file path or stdin.
pub fn read_input(input: &str) -> Result<String> {
    if input == STDIN {
        io::read_to_string(io::stdin()).context("Failed to read chart from stdin")
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read chart file {}", input))
    }
}

/// Read and normalize a chart.
pub fn load_chart(input: &str) -> Result<Chart> {
    let text = read_input(input)?;
    debug!("Read {} bytes from {}", text.len(), input);
    Chart::from_json(&text).with_context(|| format!("Failed to load chart {}", input))
}

/// Write to a file, or to stdout when no path is given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            debug!("Wrote {} bytes to {}", content.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit_core::Error;
    use tempfile::NamedTempFile;

    fn write_chart(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_chart_from_file() {
        let file = write_chart(
            r#"[
                {"type": "Single", "beat": 5, "lane": 1},
                {"type": "BPM", "beat": 1, "bpm": 140}
            ]"#,
        );
        let chart = load_chart(file.path().to_str().unwrap()).unwrap();

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.notes()[1].beat(), 4.0);
    }

    #[test]
    fn test_load_chart_missing_anchor() {
        let file = write_chart(r#"[{"type": "Single", "beat": 0, "lane": 1}]"#);
        let err = load_chart(file.path().to_str().unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingTempoAnchor)
        ));
    }

    #[test]
    fn test_load_chart_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_chart(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to read chart file"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(Some(path.to_str().unwrap()), "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
