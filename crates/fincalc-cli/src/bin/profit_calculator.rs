//! Profit calculator entry point.

use anyhow::Result;
use clap::Parser;

use fincalc_cli::cli::ProfitCli;
use fincalc_cli::commands;

fn main() -> Result<()> {
    commands::profit::execute(ProfitCli::parse())
}
