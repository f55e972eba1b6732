//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without reading or writing any chart files.

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "chartkit")]
struct Args {
    #[arg(long, global = true, env = "CHARTKIT_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Normalize {
        input: String,
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long)]
        pretty: bool,
    },
    Stats {
        #[arg(required = true)]
        inputs: Vec<String>,
        #[arg(long)]
        json: bool,
    },
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Args::try_parse_from(["chartkit"]).is_err());
}

#[test]
fn test_parse_normalize_defaults() {
    let args = Args::try_parse_from(["chartkit", "normalize", "chart.json"]).unwrap();
    match args.command {
        Command::Normalize {
            input,
            output,
            pretty,
        } => {
            assert_eq!(input, "chart.json");
            assert!(output.is_none());
            assert!(!pretty);
        }
        _ => panic!("Expected Normalize command"),
    }
}

#[test]
fn test_parse_normalize_with_output() {
    let args = Args::try_parse_from([
        "chartkit",
        "normalize",
        "-",
        "-o",
        "out.json",
        "--pretty",
    ])
    .unwrap();
    match args.command {
        Command::Normalize {
            input,
            output,
            pretty,
        } => {
            assert_eq!(input, "-");
            assert_eq!(output.as_deref(), Some("out.json"));
            assert!(pretty);
        }
        _ => panic!("Expected Normalize command"),
    }
}

#[test]
fn test_parse_stats_multiple_inputs() {
    let args =
        Args::try_parse_from(["chartkit", "stats", "a.json", "b.json", "--json"]).unwrap();
    match args.command {
        Command::Stats { inputs, json } => {
            assert_eq!(inputs, vec!["a.json", "b.json"]);
            assert!(json);
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_parse_stats_requires_input() {
    assert!(Args::try_parse_from(["chartkit", "stats"]).is_err());
}

#[test]
fn test_parse_global_log_level() {
    let args =
        Args::try_parse_from(["chartkit", "stats", "a.json", "--log-level", "debug"]).unwrap();
    assert_eq!(args.log_level.as_deref(), Some("debug"));
}
