//! Cascade - two-port AC analyser
//!
//! Reads a netlist, sweeps it and writes the requested quantities as a
//! delimited table.
//!
//! # Usage
//!
//! ```bash
//! cascade filter.net results.csv --delimiter ';' --log-level debug
//! ```
//!
//! On any failure the output file is still created, empty, and the process
//! exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use cascade_core::{run, ExportConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two-port cascade AC analyser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path of the results table to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Digits after the decimal point
    #[arg(short, long, default_value_t = 3)]
    precision: usize,

    /// Field separator
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ExportConfig::new()
        .with_precision(args.precision)
        .with_delimiter(args.delimiter);

    match run(&args.input, &args.output, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
