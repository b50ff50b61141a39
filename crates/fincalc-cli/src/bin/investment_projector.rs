//! Investment projector entry point.

use anyhow::Result;
use clap::Parser;

use fincalc_cli::cli::InvestmentCli;
use fincalc_cli::commands;

fn main() -> Result<()> {
    commands::investment::execute(InvestmentCli::parse())
}
