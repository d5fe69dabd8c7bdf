//! Command line interface for named_collector.
//!
//! Parses arguments, sets up logging, builds the collector and writes the
//! report to standard output.

mod args;

pub use args::{Args, OutputFormat, RuntimeConfig, MAX_ITEMS};

use crate::driver::build_collector;
use crate::error::{CollectorError, Result};
use crate::report::write_report;
use std::io::{self, Write};

/// Exit code for rejected arguments, matching clap's usage errors
pub const USAGE_EXIT_CODE: i32 = 2;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(e) = validate_args(&args) {
        eprintln!("{e}");
        for suggestion in e.recovery_suggestions() {
            eprintln!("  • {suggestion}");
        }
        return Ok(USAGE_EXIT_CODE);
    }

    let config = create_runtime_config(&args);
    init_logging(config.log_filter);
    log::debug!("Runtime configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&config, &mut out) {
        Ok(()) => Ok(0),
        Err(e) if e.is_broken_pipe() => {
            log::debug!("Output closed early: {}", e);
            Ok(0)
        }
        Err(e) => Err(e),
    }
}

/// Build the collector described by `config` and write its report to `out`
pub fn execute<W: Write>(config: &RuntimeConfig, out: &mut W) -> Result<()> {
    let collector = build_collector(&config.driver);
    write_report(&collector, config.format, out)
}

/// Validate arguments without executing (for testing)
pub fn validate_args(args: &Args) -> Result<()> {
    args.validate()
        .map_err(|reason| CollectorError::InvalidArguments { reason })
}

/// Create runtime configuration from arguments
pub fn create_runtime_config(args: &Args) -> RuntimeConfig {
    RuntimeConfig::from(args)
}

/// Install the stderr logger. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init();
}
