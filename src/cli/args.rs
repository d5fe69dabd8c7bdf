//! Command line argument parsing and validation.
//!
//! Every flag is optional; with none given the program prints the
//! `test` collector with five `item_N` labels.

use crate::driver::DriverConfig;
use crate::report::ReportFormat;
use clap::{Parser, ValueEnum};

/// Upper bound accepted for `--count`
pub const MAX_ITEMS: usize = 1_000_000;

/// Named Collector - build and print a named list of generated items
#[derive(Parser, Debug)]
#[command(
    name = "named_collector",
    version,
    about = "Build a named collector of generated items and print it"
)]
pub struct Args {
    /// Name of the collector
    #[arg(short, long, default_value = "test", value_name = "NAME")]
    pub name: String,

    /// Number of items to add
    #[arg(short, long, default_value_t = 5, value_name = "COUNT")]
    pub count: usize,

    /// Prefix for each generated item label
    #[arg(short, long, default_value = "item_", value_name = "PREFIX")]
    pub prefix: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// JSON document
    #[cfg(feature = "json")]
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            #[cfg(feature = "json")]
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Check if running in verbose mode
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.count > MAX_ITEMS {
            return Err(format!(
                "Item count {} exceeds the maximum of {}",
                self.count, MAX_ITEMS
            ));
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Collector construction parameters
    pub driver: DriverConfig,
    /// How the report is written
    pub format: ReportFormat,
    /// Log level filter applied when `RUST_LOG` is unset
    pub log_filter: &'static str,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        RuntimeConfig {
            driver: DriverConfig {
                name: args.name.clone(),
                count: args.count,
                prefix: args.prefix.clone(),
            },
            format: args.format.into(),
            log_filter: if args.is_verbose() { "debug" } else { "warn" },
        }
    }
}
