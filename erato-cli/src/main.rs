//! Erato CLI - find primes with a parallel Sieve of Eratosthenes.
//!
//! This is the main entry point for the erato binary. It parses arguments
//! with clap, initializes logging, loads configuration, runs the sieve and
//! reports the primes and the elapsed wall-clock time.

mod config;
mod error;
mod report;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use erato_sieve::Sieve;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{CliError, Result};

/// Default bound when `-n` is absent.
const DEFAULT_BOUND: usize = 16;

/// Erato - find every prime below N
///
/// The multiples of each prime are marked by a pool of worker threads
/// sharing one buffer.
#[derive(Parser, Debug)]
#[command(name = "erato")]
#[command(author = "Erato Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find every prime below N with a parallel Sieve of Eratosthenes", long_about = None)]
struct Cli {
    /// The number under which to find primes
    #[arg(short = 'n', long = "bound", value_name = "N", default_value_t = DEFAULT_BOUND, value_parser = parse_bound)]
    bound: usize,

    /// Print out the primes after they have been found
    #[arg(short = 'o', long = "print")]
    print: bool,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long = "threads", value_name = "COUNT", env = "ERATO_THREADS", value_parser = parse_threads)]
    threads: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, env = "ERATO_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "ERATO_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "ERATO_NO_COLOR")]
    no_color: bool,
}

/// Parse the sieve bound; anything below 2 has no candidates.
fn parse_bound(value: &str) -> std::result::Result<usize, String> {
    let bound: usize = value
        .parse()
        .map_err(|e| format!("`{}` is not a valid bound: {}", value, e))?;
    if bound < 2 {
        return Err(format!("bound must be at least 2, got {}", bound));
    }
    Ok(bound)
}

fn parse_threads(value: &str) -> std::result::Result<usize, String> {
    let threads: usize = value
        .parse()
        .map_err(|e| format!("`{}` is not a valid thread count: {}", value, e))?;
    if threads == 0 {
        return Err("thread count must be at least 1".to_string());
    }
    Ok(threads)
}

/// Main entry point for the erato CLI.
///
/// Argument errors are reported by clap (exit status 2). Any other failure
/// is printed to stderr and exits with status 1 before anything is written
/// to stdout.
fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    match run(cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, run the sieve and write the report.
fn run(cli: Cli, start: Instant) -> Result<()> {
    let config = load_config(cli.config.as_deref())?.with_workers(cli.threads);
    let verbose = cli.verbose || config.verbose;
    let print = cli.print || config.print;

    init_logging(verbose, cli.no_color)?;
    tracing::debug!(?config, "configuration resolved");

    let sieve = Sieve::new(config.sieve)?;
    tracing::debug!(bound = cli.bound, workers = sieve.workers(), "starting sieve");

    let outcome = sieve.run(cli.bound)?;
    tracing::debug!(stats = %outcome.stats, primes = outcome.primes.len(), "sieve finished");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if print {
        report::write_primes(&mut out, &outcome.primes)?;
    }
    report::write_runtime(&mut out, start.elapsed())?;
    out.flush()?;

    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only the result. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_names(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
