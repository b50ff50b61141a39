//! Parsing of console input into numeric values.
//!
//! Every value either tool reads goes through [`parse_value`], which turns
//! external text into an `f64` or a [`FinCalcError`]. Nothing is silently
//! defaulted here; substituting a default for a blank answer is the caller's
//! decision (see [`Field::has_default`]).

use std::fmt;

use crate::error::{FinCalcError, FinCalcResult};

/// A value one of the tools asks the user for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Amount invested up front.
    InvestmentAmount,
    /// Investment horizon in years (fractional years allowed).
    NumberOfYears,
    /// Expected annual return, in percent.
    ExpectedReturnRate,
    /// Revenue for the period.
    Revenue,
    /// Expenses for the period.
    Expenses,
    /// Tax rate, in percent.
    TaxRate,
}

impl Field {
    /// Fields read by the investment projector, in prompt order.
    pub const INVESTMENT: [Field; 3] = [
        Field::InvestmentAmount,
        Field::NumberOfYears,
        Field::ExpectedReturnRate,
    ];

    /// Fields read by the profit calculator, in prompt order.
    pub const PROFIT: [Field; 3] = [Field::Revenue, Field::Expenses, Field::TaxRate];

    /// Prompt text shown before reading this field.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::InvestmentAmount => "Enter the investment amount:",
            Field::NumberOfYears => "Enter the number of years:",
            Field::ExpectedReturnRate => "Enter the expected return rate (%):",
            Field::Revenue => "Enter revenue:",
            Field::Expenses => "Enter expenses:",
            Field::TaxRate => "Enter tax rate (%):",
        }
    }

    /// Whether a blank or missing answer may fall back to a configured default.
    #[must_use]
    pub fn has_default(&self) -> bool {
        matches!(self, Field::ExpectedReturnRate)
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::InvestmentAmount => "investment amount",
            Field::NumberOfYears => "number of years",
            Field::ExpectedReturnRate => "expected return rate",
            Field::Revenue => "revenue",
            Field::Expenses => "expenses",
            Field::TaxRate => "tax rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the text entered for `field` into a finite number.
///
/// # Errors
///
/// Returns `FinCalcError::MissingInput` if the text is blank and
/// `FinCalcError::InvalidInput` if it is not a finite number (`inf` and
/// `NaN` are rejected even though `f64::from_str` accepts them).
///
/// # Example
///
/// ```rust
/// use fincalc_core::input::{parse_value, Field};
///
/// assert_eq!(parse_value(Field::Revenue, " 10000 ").unwrap(), 10_000.0);
/// assert!(parse_value(Field::Revenue, "ten").is_err());
/// ```
pub fn parse_value(field: Field, text: &str) -> FinCalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FinCalcError::missing_input(field));
    }

    parse_finite(trimmed).ok_or_else(|| FinCalcError::invalid_input(field, trimmed))
}

/// Parses `text` as a finite number, ignoring surrounding whitespace.
///
/// Returns `None` for blank text, non-numeric text, `inf` and `NaN`. Used for
/// rates given on the command line, which have no [`Field`].
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_value(Field::InvestmentAmount, "1000").unwrap(), 1000.0);
        assert_eq!(parse_value(Field::NumberOfYears, "2.5").unwrap(), 2.5);
        assert_eq!(parse_value(Field::TaxRate, "-3").unwrap(), -3.0);
        assert_eq!(parse_value(Field::Revenue, "1e4").unwrap(), 10_000.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_value(Field::Expenses, "\t4000\n").unwrap(), 4000.0);
    }

    #[test]
    fn test_blank_is_missing() {
        let err = parse_value(Field::Revenue, "   ").unwrap_err();
        assert_eq!(err, FinCalcError::missing_input(Field::Revenue));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let err = parse_value(Field::Expenses, "12abc").unwrap_err();
        assert_eq!(err, FinCalcError::invalid_input(Field::Expenses, "12abc"));
    }

    #[test]
    fn test_non_finite_rejected() {
        for text in ["inf", "-inf", "NaN", "infinity"] {
            assert!(
                matches!(
                    parse_value(Field::ExpectedReturnRate, text),
                    Err(FinCalcError::InvalidInput { .. })
                ),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite(" 2.5 "), Some(2.5));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
    }

    #[test]
    fn test_only_return_rate_has_default() {
        let with_default: Vec<_> = Field::INVESTMENT
            .iter()
            .chain(Field::PROFIT.iter())
            .filter(|f| f.has_default())
            .collect();
        assert_eq!(with_default, vec![&Field::ExpectedReturnRate]);
    }

    #[test]
    fn test_prompts() {
        assert_eq!(Field::InvestmentAmount.prompt(), "Enter the investment amount:");
        assert_eq!(Field::TaxRate.prompt(), "Enter tax rate (%):");
    }
}
