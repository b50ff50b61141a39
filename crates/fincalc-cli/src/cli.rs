//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use fincalc_core::input::parse_finite;
use serde::{Deserialize, Serialize};

/// Options shared by both tools.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Output format [default: text]
    #[arg(short, long, value_enum, env = "FINCALC_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Do not print prompts (for piped input)
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a JSON configuration file
    #[arg(long, env = "FINCALC_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Investment projector - future value of an investment, nominal and after inflation
#[derive(Parser, Debug)]
#[command(name = "investment-projector")]
#[command(author, version, about, long_about = None)]
pub struct InvestmentCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Expected return rate (%) used when the prompt is left blank [default: 5.5]
    #[arg(
        long,
        env = "FINCALC_RETURN_RATE",
        value_name = "PERCENT",
        value_parser = parse_percent
    )]
    pub return_rate: Option<f64>,

    /// Annual inflation rate (%) [default: 2.5]
    #[arg(
        long,
        env = "FINCALC_INFLATION_RATE",
        value_name = "PERCENT",
        value_parser = parse_percent
    )]
    pub inflation_rate: Option<f64>,
}

/// Profit calculator - earnings before tax, profit, and their ratio
#[derive(Parser, Debug)]
#[command(name = "profit-calculator")]
#[command(author, version, about, long_about = None)]
pub struct ProfitCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Parses a percentage flag, rejecting `inf` and `NaN`.
fn parse_percent(s: &str) -> Result<f64, String> {
    parse_finite(s).ok_or_else(|| format!("'{s}' is not a finite number"))
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain sentences, one result per line
    #[default]
    Text,
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
