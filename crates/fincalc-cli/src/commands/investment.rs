//! Investment projector.
//!
//! Asks for an amount, a horizon and an expected return, then prints the
//! nominal and inflation-adjusted future value.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fincalc_core::input::Field;
use fincalc_core::investment::{project, InvestmentInputs, InvestmentProjection};
use fincalc_core::Rate;
use tracing::debug;

use crate::cli::InvestmentCli;
use crate::error::CliResult;
use crate::logging;
use crate::output::write_report;
use crate::prompt::Prompter;
use crate::settings::{FileSettings, ProjectorSettings};

/// Prompts for the inputs, projects them and writes the result to `out`.
pub fn run<R, W, E>(
    settings: &ProjectorSettings,
    prompter: &mut Prompter<R, W, E>,
    out: &mut impl Write,
) -> CliResult<InvestmentProjection>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let amount = prompter.read_value(Field::InvestmentAmount, None)?;
    let years = prompter.read_value(Field::NumberOfYears, None)?;
    let rate = prompter.read_value(
        Field::ExpectedReturnRate,
        Some(settings.default_return_rate.as_percentage()),
    )?;

    let inputs = InvestmentInputs::new(amount, years, Rate::from_percentage(rate));
    let projection = project(&inputs, settings.inflation);
    debug!(?inputs, inflation = %settings.inflation, ?projection, "projected");

    if prompter.has_prompted() {
        writeln!(out)?;
    }
    write_report(out, settings.common.format, &inputs, &projection)?;
    Ok(projection)
}

/// Execute the investment projector against the process's stdio.
pub fn execute(cli: InvestmentCli) -> Result<()> {
    logging::init(cli.common.verbose);

    let file = FileSettings::discover(cli.common.config.as_deref())?;
    let settings = ProjectorSettings::resolve(&cli, &file);
    debug!(?settings, "resolved settings");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), io::stderr())
        .with_prompts(settings.common.show_prompts);
    run(&settings, &mut prompter, &mut io::stdout())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::settings::Settings;
    use std::io::Cursor;

    fn settings(format: OutputFormat) -> ProjectorSettings {
        ProjectorSettings {
            common: Settings {
                format,
                show_prompts: false,
            },
            default_return_rate: Rate::from_percentage(5.5),
            inflation: Rate::from_percentage(2.5),
        }
    }

    fn run_with(input: &str, settings: &ProjectorSettings) -> (InvestmentProjection, String) {
        let mut prompter = Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Vec::new(),
        )
        .with_prompts(settings.common.show_prompts);
        let mut out = Vec::new();
        let projection = run(settings, &mut prompter, &mut out).unwrap();
        (projection, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_reference_run() {
        let (projection, out) = run_with("1000\n10\n5.5\n", &settings(OutputFormat::Text));
        assert!((projection.future_value - 1708.14).abs() < 0.005);
        assert!((projection.future_real_value - 1334.40).abs() < 0.005);
        assert!(out.starts_with("The future value is: $1708.14"));
    }

    #[test]
    fn test_blank_rate_uses_configured_default() {
        let mut s = settings(OutputFormat::Text);
        s.default_return_rate = Rate::from_percentage(10.0);
        s.inflation = Rate::ZERO;
        let (projection, _) = run_with("100\n2\n\n", &s);
        assert!((projection.future_value - 121.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rate_at_eof_uses_default() {
        let (with_default, _) = run_with("1000 10", &settings(OutputFormat::Text));
        let (explicit, _) = run_with("1000 10 5.5", &settings(OutputFormat::Text));
        assert_eq!(with_default, explicit);
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let s = settings(OutputFormat::Json);
        let (_, first) = run_with("2500 7.5 6\n", &s);
        let (_, second) = run_with("2500 7.5 6\n", &s);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_years_fails() {
        let s = settings(OutputFormat::Text);
        let mut prompter = Prompter::new(Cursor::new(b"1000\n".to_vec()), Vec::new(), Vec::new())
            .with_prompts(false);
        let mut out = Vec::new();
        assert!(run(&s, &mut prompter, &mut out).is_err());
        assert!(out.is_empty());
    }
}
