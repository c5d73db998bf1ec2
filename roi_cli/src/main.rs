//! # roi - HR Software ROI Calculator
//!
//! Terminal front end for `roi_core`: run the questionnaire, compute the
//! estimate from a scenario file, and write the CSV export.
//!
//! ```text
//! roi wizard --csv .                    # answer the questions, export CSV
//! roi calc --input acme.json --json     # metrics + advisory as JSON
//! roi template > acme.json              # starting scenario
//! ```

mod report;
mod wizard;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

use roi_core::calculations::{advise, calculate_checked, Advisory, DerivedMetrics};
use roi_core::errors::RoiError;
use roi_core::export::{export_csv, EXPORT_FILENAME};
use roi_core::file_io::{load_scenario, scenario_json, write_export};
use roi_core::questionnaire::RoiInput;

use crate::report::{render_summary, render_tables};
use crate::wizard::Wizard;

#[derive(Parser, Debug)]
#[command(name = "roi")]
#[command(about = "Estimate the ROI of adopting HR software", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the estimate from a scenario file (or the defaults)
    Calc {
        /// Scenario JSON file; defaults are used when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print metrics and advisory output as JSON
        #[arg(long)]
        json: bool,

        /// Write the CSV export to this file (or into this directory)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Answer the five-step questionnaire interactively
    Wizard {
        /// Start from this scenario instead of the defaults
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the CSV export to this file (or into this directory)
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the default scenario JSON
    Template,

    /// Print the time-saved constants and HR/manager splits
    Tables,
}

/// JSON document printed by `calc --json`
#[derive(Serialize)]
struct CalcOutput<'a> {
    input: &'a RoiInput,
    metrics: &'a DerivedMetrics,
    advisory: &'a Advisory,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(roi_error) = e.downcast_ref::<RoiError>() {
                if let Ok(json) = serde_json::to_string_pretty(roi_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Calc { input, json, csv } => {
            let input = load_or_default(input.as_deref())?;
            let metrics = calculate_checked(&input).context("Scenario failed validation")?;
            let advisory = advise(&input);

            if json {
                let output = CalcOutput {
                    input: &input,
                    metrics: &metrics,
                    advisory: &advisory,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render_summary(&input, &metrics, &advisory));
            }

            if let Some(path) = csv {
                export(&path, &input, &metrics, &advisory)?;
            }
            Ok(())
        }
        Commands::Wizard { input, csv } => {
            let start = load_or_default(input.as_deref())?;
            let stdin = io::stdin();
            let answers = Wizard::new(stdin.lock(), io::stdout().lock())
                .run(start)
                .context("Questionnaire aborted")?;

            if let Some(path) = csv {
                let metrics = calculate_checked(&answers)?;
                export(&path, &answers, &metrics, &advise(&answers))?;
            }
            Ok(())
        }
        Commands::Template => {
            println!("{}", scenario_json(&RoiInput::default())?);
            Ok(())
        }
        Commands::Tables => {
            print!("{}", render_tables());
            Ok(())
        }
    }
}

fn load_or_default(path: Option<&Path>) -> Result<RoiInput> {
    match path {
        Some(path) => {
            let input = load_scenario(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?;
            log::info!("Using scenario {}", path.display());
            Ok(input)
        }
        None => {
            log::info!("No scenario given, using questionnaire defaults");
            Ok(RoiInput::default())
        }
    }
}

/// Write the CSV export; a directory target gets the standard file name.
fn export(path: &Path, input: &RoiInput, metrics: &DerivedMetrics, advisory: &Advisory) -> Result<()> {
    let target = if path.is_dir() {
        path.join(EXPORT_FILENAME)
    } else {
        path.to_path_buf()
    };
    write_export(&target, &export_csv(input, metrics, advisory))?;
    eprintln!("Wrote CSV export to {}", target.display());
    Ok(())
}
