//! Earnings before tax, after-tax profit, and their ratio.
//!
//! ```text
//! EBT    = revenue - expenses
//! profit = EBT × (1 - tax rate)
//! ratio  = EBT / profit
//! ```
//!
//! The ratio is not guarded: at a 100% tax rate the profit is zero and the
//! ratio comes out as `inf` (or `NaN` when EBT is also zero). Callers decide
//! how to present that; [`ProfitReport::has_defined_ratio`] tells them when
//! they need to.

use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// Inputs to a profit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitInputs {
    /// Revenue for the period.
    pub revenue: f64,
    /// Expenses for the period.
    pub expenses: f64,
    /// Tax rate applied to EBT.
    pub tax_rate: Rate,
}

impl ProfitInputs {
    /// Creates profit inputs.
    #[must_use]
    pub fn new(revenue: f64, expenses: f64, tax_rate: Rate) -> Self {
        Self {
            revenue,
            expenses,
            tax_rate,
        }
    }
}

/// Result of a profit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Revenue minus expenses.
    pub earnings_before_tax: f64,
    /// EBT after tax.
    pub profit: f64,
    /// EBT divided by profit; non-finite when profit is zero.
    pub ratio: f64,
}

impl ProfitReport {
    /// Returns true if the ratio is a finite number.
    #[must_use]
    pub fn has_defined_ratio(&self) -> bool {
        self.ratio.is_finite()
    }
}

/// Revenue minus expenses.
#[must_use]
pub fn earnings_before_tax(revenue: f64, expenses: f64) -> f64 {
    revenue - expenses
}

/// EBT after deducting `tax_rate`.
#[must_use]
pub fn profit_after_tax(earnings_before_tax: f64, tax_rate: Rate) -> f64 {
    earnings_before_tax * tax_rate.complement()
}

/// Runs the full calculation.
///
/// # Example
///
/// ```rust
/// use fincalc_core::profit::{calculate, ProfitInputs};
/// use fincalc_core::types::Rate;
///
/// let report = calculate(&ProfitInputs::new(10_000.0, 4_000.0, Rate::from_percentage(20.0)));
/// assert_eq!(report.earnings_before_tax, 6000.0);
/// assert_eq!(report.profit, 4800.0);
/// assert_eq!(report.ratio, 1.25);
/// ```
#[must_use]
pub fn calculate(inputs: &ProfitInputs) -> ProfitReport {
    let ebt = earnings_before_tax(inputs.revenue, inputs.expenses);
    let profit = profit_after_tax(ebt, inputs.tax_rate);
    ProfitReport {
        earnings_before_tax: ebt,
        profit,
        ratio: ebt / profit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_case() {
        let report = calculate(&ProfitInputs::new(10_000.0, 4_000.0, Rate::from_percentage(20.0)));
        assert_eq!(format!("{:.2}", report.earnings_before_tax), "6000.00");
        assert_eq!(format!("{:.2}", report.profit), "4800.00");
        assert_eq!(format!("{:.2}", report.ratio), "1.25");
        assert!(report.has_defined_ratio());
    }

    #[test]
    fn test_zero_tax_ratio_is_one() {
        let report = calculate(&ProfitInputs::new(750.0, 250.0, Rate::ZERO));
        assert_relative_eq!(report.profit, 500.0);
        assert_relative_eq!(report.ratio, 1.0);
    }

    #[test]
    fn test_loss_keeps_sign() {
        let report = calculate(&ProfitInputs::new(1_000.0, 3_000.0, Rate::from_percentage(25.0)));
        assert_relative_eq!(report.earnings_before_tax, -2000.0);
        assert_relative_eq!(report.profit, -1500.0);
        assert_relative_eq!(report.ratio, 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_full_tax_gives_infinite_ratio() {
        let report = calculate(&ProfitInputs::new(10_000.0, 4_000.0, Rate::from_percentage(100.0)));
        assert_eq!(report.profit, 0.0);
        assert!(report.ratio.is_infinite());
        assert!(report.ratio.is_sign_positive());
        assert!(!report.has_defined_ratio());
    }

    #[test]
    fn test_full_tax_with_loss_is_still_infinite() {
        // -3000 × 0.0 is -0.0, so the quotient is +inf again
        let report = calculate(&ProfitInputs::new(1_000.0, 4_000.0, Rate::from_percentage(100.0)));
        assert_eq!(report.profit, 0.0);
        assert_eq!(report.ratio, f64::INFINITY);
    }

    #[test]
    fn test_break_even_ratio_is_nan() {
        let report = calculate(&ProfitInputs::new(5_000.0, 5_000.0, Rate::from_percentage(30.0)));
        assert_eq!(report.earnings_before_tax, 0.0);
        assert!(report.ratio.is_nan());
        assert!(!report.has_defined_ratio());
    }
}
