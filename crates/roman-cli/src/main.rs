//! CLI entry point for Roman numeral validation and conversion.

mod report;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use report::Report;

#[derive(Parser)]
#[command(name = "roman")]
#[command(version)]
#[command(about = "Validate and convert Roman numerals", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report whether each numeral is well formed
    Check {
        #[arg(required = true, value_name = "NUMERAL")]
        inputs: Vec<String>,
    },
    /// Print the integer value of each numeral
    Convert {
        #[arg(required = true, value_name = "NUMERAL")]
        inputs: Vec<String>,
    },
    /// Print the canonical numeral for each integer (1..=3999)
    Encode {
        #[arg(required = true, value_name = "N")]
        values: Vec<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn emit(reports: &[Report], format: Format) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        Format::Text => {
            for report in reports {
                writeln!(out, "{}", report.to_text()).context("Failed to write output")?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, reports)
                .context("Failed to serialize reports")?;
            writeln!(out).context("Failed to write output")?;
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<bool> {
    let reports = match &cli.command {
        Commands::Check { inputs } => report::check(inputs),
        Commands::Convert { inputs } => report::convert(inputs),
        Commands::Encode { values } => report::encode(values),
    };

    tracing::debug!(
        total = reports.len(),
        failed = reports.iter().filter(|r| !r.ok).count(),
        "processed inputs"
    );

    emit(&reports, cli.format)?;
    Ok(report::all_ok(&reports))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
