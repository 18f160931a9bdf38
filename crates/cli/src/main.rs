// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use cinema_ledger_api::BookingLedger;
use clap::Parser;
use serde_json::Value;
use tracing::error;

use crate::args::Args;
use crate::commands::{execute, open_ledger};
use crate::error::CliError;

fn run(args: &Args) -> Result<String, CliError> {
    let ledger: BookingLedger = open_ledger(args)?;
    let output: Value = execute(&ledger, args)?;
    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
