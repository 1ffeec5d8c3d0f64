//! One-shot emitter.
//!
//! Usage:
//!   gamedebug <info|warning|error> [--tag TAG] [--dir DIR] [--no-color] [--no-time]
//!             [--no-file] [--stack] [--no-banner] <message>...

use clap::Parser;
use gamedebug::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
