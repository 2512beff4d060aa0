//! # repo-bridge CLI
//!
//! Binary entry point. Parses arguments with `clap` and hands off to the
//! interactive provisioning flow in the library crate. Any error is printed
//! by `anyhow` and the process exits with status 1.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
