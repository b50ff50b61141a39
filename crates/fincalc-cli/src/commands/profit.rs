//! Profit calculator.
//!
//! Asks for revenue, expenses and a tax rate, then prints EBT, after-tax
//! profit and the EBT/profit ratio.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fincalc_core::input::Field;
use fincalc_core::profit::{calculate, ProfitInputs, ProfitReport};
use fincalc_core::Rate;
use tracing::{debug, warn};

use crate::cli::ProfitCli;
use crate::error::CliResult;
use crate::logging;
use crate::output::write_report;
use crate::prompt::Prompter;
use crate::settings::{FileSettings, Settings};

/// Prompts for the inputs, calculates and writes the result to `out`.
///
/// A zero profit is reported, not rejected: the ratio is printed as the
/// non-finite value it is and a warning is logged.
pub fn run<R, W, E>(
    settings: &Settings,
    prompter: &mut Prompter<R, W, E>,
    out: &mut impl Write,
) -> CliResult<ProfitReport>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let revenue = prompter.read_value(Field::Revenue, None)?;
    let expenses = prompter.read_value(Field::Expenses, None)?;
    let tax_rate = prompter.read_value(Field::TaxRate, None)?;

    let inputs = ProfitInputs::new(revenue, expenses, Rate::from_percentage(tax_rate));
    let report = calculate(&inputs);
    debug!(?inputs, ?report, "calculated");

    if !report.has_defined_ratio() {
        warn!(
            profit = report.profit,
            ratio = report.ratio,
            "profit is zero, EBT/profit ratio is undefined"
        );
    }

    if prompter.has_prompted() {
        writeln!(out)?;
    }
    write_report(out, settings.format, &inputs, &report)?;
    Ok(report)
}

/// Execute the profit calculator against the process's stdio.
pub fn execute(cli: ProfitCli) -> Result<()> {
    logging::init(cli.common.verbose);

    let file = FileSettings::discover(cli.common.config.as_deref())?;
    let settings = Settings::resolve(&cli.common, &file);
    debug!(?settings, "resolved settings");

    let stdin = io::stdin();
    let mut prompter =
        Prompter::new(stdin.lock(), io::stdout(), io::stderr()).with_prompts(settings.show_prompts);
    run(&settings, &mut prompter, &mut io::stdout())?;
    Ok(())
}
