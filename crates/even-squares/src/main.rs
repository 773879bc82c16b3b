// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! even-squares
//!
//! Prints the squares of the even numbers from 1 to 20 on a single stdout line.
//!
//! Invariants:
//! - stdout carries exactly one line; diagnostics go to stderr.
//! - Output is identical on every run.

mod error;
mod report;
mod squares;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let squares = squares::compute_even_squares();
    report::report(&squares, std::io::stdout().lock()).context("writing to stdout")?;

    Ok(())
}
