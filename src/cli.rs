use crate::engine::NumberEnumerator;
use crate::rules::DisallowedDigits;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

/// How many of the largest results to print after the count
const PREVIEW_LEN: usize = 10;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Dialgen - Enumerate valid phone numbers from digit rules
#[derive(Parser, Debug)]
#[command(name = "dialgen")]
#[command(
    about = "Enumerate every valid phone number of a given length, given a set of disallowed digits"
)]
#[command(version)]
pub struct CliArgs {
    /// Length of the phone numbers (number of digit positions)
    #[arg(short, long)]
    pub length: i64,

    /// Disallowed digit; may be given multiple times
    #[arg(short, long)]
    pub disallowed: Vec<i64>,

    /// Log level (default: warn)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub length: i64,
    pub disallowed: Vec<i64>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    let args = CliArgs::parse();

    CliConfig {
        length: args.length,
        disallowed: args.disallowed,
        log_level: args.log_level,
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(&config.log_level)?;

    let enumerator = NumberEnumerator::new(DisallowedDigits::from_values(&config.disallowed));

    info!(
        "Enumerating numbers of length {} with disallowed digits {:?}",
        config.length, config.disallowed
    );

    let numbers = enumerator
        .enumerate(config.length)
        .with_context(|| format!("Invalid length {}", config.length))?;

    println!("Found {} valid numbers", numbers.len());
    if !numbers.is_empty() {
        let tail = &numbers[numbers.len().saturating_sub(PREVIEW_LEN)..];
        println!("Largest {}: {:?}", tail.len(), tail);
    }

    Ok(())
}
