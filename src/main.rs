//! visualise: print the bit pattern of a char or int value
//!
//! A value the type cannot hold prints `Input error.` in place of the bits
//! and still exits 0. An unknown type prints the same message to stderr and
//! exits with status 1. Run with `--verbose` or `RUST_LOG=debug` to see why.

use std::process::ExitCode;

use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::visualise::INPUT_ERROR;

#[derive(Parser)]
#[command(name = "visualise")]
#[command(about = "Show the bit pattern of a char or int value", long_about = None)]
#[command(version)]
struct Cli {
    /// Value type: char or int
    #[arg(value_name = "TYPE")]
    type_name: String,

    /// Decimal value, for example 7 or -50
    #[arg(allow_hyphen_values = true)]
    decimal: String,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::visualise::execute(&cli.type_name, &cli.decimal) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("{:#}", err);
            eprintln!(
                "{}",
                INPUT_ERROR.if_supports_color(Stream::Stderr, |text| text.red())
            );
            ExitCode::FAILURE
        }
    }
}
