//! stockmeta-check - Microstock metadata compliance checker
//!
//! Reads metadata documents (JSON files or stdin), scores every record with
//! the metadata validator, and prints a text or JSON report.
//!
//! **Exit status:**
//! - 0: every record satisfies the submission policy
//! - 1: at least one record was rejected
//! - 2: input or configuration error

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use stockmeta_common::config::{
    ConfigResolver, LoggingConfig, OutputFormat, ResolvedConfig, TomlConfig,
};
use stockmeta_validator::host::{
    exit_status, read_source, CliFormatter, RecordReport, EXIT_FAILURE,
};
use stockmeta_validator::MetadataValidator;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for stockmeta-check
#[derive(Parser, Debug)]
#[command(name = "stockmeta-check")]
#[command(about = "Check image metadata against microstock submission policy")]
#[command(version)]
struct Args {
    /// Metadata JSON files (`-` reads stdin)
    #[arg(required = true, value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Config file (overrides STOCKMETA_CONFIG and the platform config file)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Reject records scoring below this value (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Accept records that carry error-severity issues
    #[arg(long)]
    allow_errors: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let resolved = match load_config(&args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("stockmeta-check: {:#}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    if let Err(e) = init_tracing(&resolved.config.logging) {
        eprintln!("stockmeta-check: {:#}", e);
        return ExitCode::from(EXIT_FAILURE);
    }
    resolved.log_resolution();

    match run(&args, &resolved.config) {
        Ok(reports) => ExitCode::from(exit_status(&reports)),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("stockmeta-check: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Resolve the config file and apply command-line overrides
fn load_config(args: &Args) -> Result<ResolvedConfig> {
    let mut resolved = ConfigResolver::new(args.config.clone())
        .resolve()
        .context("Failed to load configuration")?;
    let config = &mut resolved.config;

    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.pretty {
        config.output.pretty = true;
    }
    if let Some(min_score) = args.min_score {
        config.policy.min_score = Some(min_score);
    }
    if args.allow_errors {
        config.policy.fail_on_error = false;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(resolved)
}

/// Initialize tracing: RUST_LOG wins, otherwise the configured level
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Validate every record and print the reports
fn run(args: &Args, config: &TomlConfig) -> Result<Vec<RecordReport>> {
    let validator = MetadataValidator::new();
    let mut reports = Vec::new();

    for input in &args.inputs {
        let records = read_source(input)
            .with_context(|| format!("Failed to load metadata from {}", input.display()))?;
        for record in &records {
            reports.push(RecordReport::build(&validator, record, &config.policy));
        }
    }

    info!(records = reports.len(), "Validation finished");

    match config.output.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", CliFormatter::format_report(report));
            }
            println!("{}", CliFormatter::format_summary(&reports));
        }
        OutputFormat::Json => {
            for report in &reports {
                println!("{}", CliFormatter::format_json(report, config.output.pretty)?);
            }
        }
    }

    Ok(reports)
}
