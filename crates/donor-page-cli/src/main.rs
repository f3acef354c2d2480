#![forbid(unsafe_code)]

//! Donor Page CLI
//!
//! Migrates and checks stored contribution-page elements outside the page
//! builder.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use donor_page_core::{EditorLimits, Interval};
use donor_page_editors::{EditorContext, PagePreview};
use tracing_subscriber::EnvFilter;

/// Donor Page Command-Line Interface
#[derive(Parser, Debug)]
#[command(name = "donor-page", author, version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Contribution intervals enabled on the page
    #[arg(
        long,
        global = true,
        value_delimiter = ',',
        value_parser = parse_interval,
        default_values = ["one_time", "month", "year"]
    )]
    intervals: Vec<Interval>,

    /// Editor limits file (TOML)
    #[arg(long, global = true, env = "DONOR_PAGE_LIMITS")]
    limits: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Migrate legacy content and repair stale defaults
    Migrate {
        /// Element, element array, or page JSON file
        file: PathBuf,

        /// Rewrite the file instead of printing the result
        #[arg(long)]
        in_place: bool,
    },
    /// Report save-readiness and field errors for each element
    Check {
        /// Element, element array, or page JSON file
        file: PathBuf,

        /// The organization offers the complimentary subscription benefit
        #[arg(long)]
        offer_nyt_comp: bool,
    },
}

fn parse_interval(value: &str) -> std::result::Result<Interval, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown interval '{value}' (expected one_time, month, or year)"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn context(args: &Args, offer_nyt_comp: bool) -> Result<EditorContext> {
    let limits = match &args.limits {
        Some(path) => EditorLimits::load(path)
            .with_context(|| format!("Failed to load limits from {}", path.display()))?,
        None => EditorLimits::default(),
    };
    Ok(EditorContext {
        contribution_intervals: EditorContext::with_intervals(args.intervals.iter().copied())
            .contribution_intervals,
        page_preview: PagePreview { offer_nyt_comp },
        limits,
    })
}

fn run(args: Args) -> Result<ExitCode> {
    match &args.command {
        Command::Migrate { file, in_place } => {
            let context = context(&args, false)?;
            let mut document = commands::read_document(file)?;
            let changed = commands::migrate_document(&mut document, &context)?;
            let output = serde_json::to_string_pretty(&document)?;
            if *in_place {
                if changed > 0 {
                    std::fs::write(file, output + "\n")
                        .with_context(|| format!("Failed to write {}", file.display()))?;
                }
                eprintln!("{changed} element(s) changed");
            } else {
                println!("{output}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            file,
            offer_nyt_comp,
        } => {
            let context = context(&args, *offer_nyt_comp)?;
            let mut document = commands::read_document(file)?;
            let reports = commands::check_document(&mut document, &context)?;
            print!("{}", commands::format_reports(&reports));
            if reports.iter().all(|report| report.ready) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}
