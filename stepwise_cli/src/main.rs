//! # Stepwise CLI Application
//!
//! Runs analysis documents from the terminal.
//!
//! Usage:
//!     stepwise run lab1.json --output lab1.report.json
//!     stepwise run lab1.json --json --time-step 0.05
//!     stepwise example --output lab1.json

mod report;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use stepwise_core::accumulation::PointLoad;
use stepwise_core::calculations::{BeamInput, CalculationItem, MechanicalSample, MechanicsInput};
use stepwise_core::{load_document, save_document, save_report, AnalysisDocument, SeriesError};

use report::render_summary;

/// Stepwise - finite differences, load superposition, and work from sampled data
#[derive(Parser)]
#[command(name = "stepwise")]
#[command(version)]
#[command(about = "Run discrete-series analyses from a JSON document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every item in an analysis document
    Run {
        /// Path to the analysis document
        document: PathBuf,

        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the JSON report instead of the text summary
        #[arg(long)]
        json: bool,

        /// Override the document's sampling interval
        #[arg(long)]
        time_step: Option<f64>,

        /// Report negative superposition maxima instead of flooring at zero
        #[arg(long)]
        allow_negative: bool,
    },

    /// Write a sample analysis document
    Example {
        /// Destination file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            document,
            output,
            json,
            time_step,
            allow_negative,
        } => run(&document, output.as_deref(), json, time_step, allow_negative),
        Commands::Example { output } => example(output.as_deref()),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        process::exit(2);
    }
}

fn run(
    path: &Path,
    output: Option<&Path>,
    json: bool,
    time_step: Option<f64>,
    allow_negative: bool,
) -> Result<(), SeriesError> {
    let mut document = load_document(path)?;

    if let Some(step) = time_step {
        document.settings.time_step = step;
    }
    if allow_negative {
        document.settings.allow_negative_moment = true;
    }
    document.settings.validate()?;

    info!(items = document.item_count(), "running analysis");
    let report = document.run();

    if json {
        let text = serde_json::to_string_pretty(&report).map_err(|e| SeriesError::SerializationError {
            reason: e.to_string(),
        })?;
        println!("{}", text);
    } else {
        print!("{}", render_summary(&report));
    }

    if let Some(output) = output {
        save_report(&report, output)?;
    }

    if !report.all_completed() {
        warn!(failures = report.failure_count(), "some items failed");
        process::exit(1);
    }
    Ok(())
}

fn example(output: Option<&Path>) -> Result<(), SeriesError> {
    let document = example_document();
    match output {
        Some(path) => {
            save_document(&document, path)?;
            info!(path = %path.display(), "wrote example document");
        }
        None => {
            let text = serde_json::to_string_pretty(&document).map_err(|e| SeriesError::SerializationError {
                reason: e.to_string(),
            })?;
            println!("{}", text);
        }
    }
    Ok(())
}

/// A beam with two point loads and a half-second motion record at 0.1 s.
fn example_document() -> AnalysisDocument {
    let mut document = AnalysisDocument::new("Example analysis");

    document.add_item(CalculationItem::Beam(BeamInput {
        label: "B-1".to_string(),
        length: 10.0,
        width: 0.1,
        height: 0.2,
        elastic_modulus: 200e9,
        loads: vec![PointLoad::new(2.0, 5000.0), PointLoad::new(7.0, 3000.0)],
    }));

    let samples = [
        (0.0, 0.00, 10.0),
        (0.1, 0.02, 12.0),
        (0.2, 0.08, 15.0),
        (0.3, 0.18, 13.0),
        (0.4, 0.32, 11.0),
        (0.5, 0.50, 10.0),
    ];
    document.add_item(CalculationItem::Mechanics(MechanicsInput {
        label: "Cart run".to_string(),
        time_step: None,
        samples: samples
            .iter()
            .map(|&(time, position, force)| MechanicalSample::new(time, position, force))
            .collect(),
    }));

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_document_runs_cleanly() {
        let report = example_document().run();
        assert_eq!(report.entries.len(), 2);
        assert!(report.all_completed());
    }

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from(["stepwise", "run", "lab.json", "--json", "--time-step", "0.05"]).unwrap();
        match cli.command {
            Commands::Run {
                document,
                json,
                time_step,
                allow_negative,
                output,
            } => {
                assert_eq!(document, PathBuf::from("lab.json"));
                assert!(json);
                assert_eq!(time_step, Some(0.05));
                assert!(!allow_negative);
                assert!(output.is_none());
            }
            Commands::Example { .. } => panic!("expected run"),
        }
    }
}
