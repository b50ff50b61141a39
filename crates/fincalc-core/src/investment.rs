//! Future value projection for a lump-sum investment.
//!
//! The projection compounds annually at the expected return rate and then
//! discounts the result by inflation over the same horizon:
//!
//! ```text
//! future value      = amount × (1 + return)^years
//! future real value = future value / (1 + inflation)^years
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Rate;

/// Inflation assumed by the projector, in percent.
pub const INFLATION_RATE_PCT: f64 = 2.5;

/// Expected annual return used when the user does not supply one, in percent.
pub const DEFAULT_RETURN_RATE_PCT: f64 = 5.5;

/// Inputs to a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    /// Amount invested today.
    pub amount: f64,
    /// Horizon in years.
    pub years: f64,
    /// Expected annual return.
    pub expected_return: Rate,
}

impl InvestmentInputs {
    /// Creates projection inputs.
    #[must_use]
    pub fn new(amount: f64, years: f64, expected_return: Rate) -> Self {
        Self {
            amount,
            years,
            expected_return,
        }
    }
}

/// Result of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    /// Nominal value at the end of the horizon.
    pub future_value: f64,
    /// Future value in today's purchasing power.
    pub future_real_value: f64,
}

/// Returns the inflation rate the projector assumes (2.5%).
#[must_use]
pub fn default_inflation() -> Rate {
    Rate::from_percentage(INFLATION_RATE_PCT)
}

/// Returns the expected return used when none is entered (5.5%).
#[must_use]
pub fn default_return_rate() -> Rate {
    Rate::from_percentage(DEFAULT_RETURN_RATE_PCT)
}

/// Nominal future value of `amount` after `years` at `rate`.
#[must_use]
pub fn future_value(amount: f64, years: f64, rate: Rate) -> f64 {
    amount * rate.growth_factor(years)
}

/// Discounts a nominal value by `inflation` over `years`.
#[must_use]
pub fn real_value(nominal: f64, years: f64, inflation: Rate) -> f64 {
    nominal / inflation.growth_factor(years)
}

/// Projects an investment, discounting by `inflation`.
///
/// # Example
///
/// ```rust
/// use fincalc_core::investment::{default_inflation, project, InvestmentInputs};
/// use fincalc_core::types::Rate;
///
/// let inputs = InvestmentInputs::new(1000.0, 10.0, Rate::from_percentage(5.5));
/// let projection = project(&inputs, default_inflation());
/// assert!((projection.future_value - 1708.14).abs() < 0.01);
/// assert!((projection.future_real_value - 1334.40).abs() < 0.01);
/// ```
#[must_use]
pub fn project(inputs: &InvestmentInputs, inflation: Rate) -> InvestmentProjection {
    let nominal = future_value(inputs.amount, inputs.years, inputs.expected_return);
    InvestmentProjection {
        future_value: nominal,
        future_real_value: real_value(nominal, inputs.years, inflation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_projection() {
        let inputs = InvestmentInputs::new(1000.0, 10.0, default_return_rate());
        let p = project(&inputs, default_inflation());

        assert_relative_eq!(p.future_value, 1708.1444583535924, epsilon = 1e-9);
        assert_relative_eq!(p.future_real_value, 1334.3997207824846, epsilon = 1e-9);
        assert_eq!(format!("{:.2}", p.future_value), "1708.14");
        assert_eq!(format!("{:.2}", p.future_real_value), "1334.40");
    }

    #[test]
    fn test_zero_years_is_identity() {
        let inputs = InvestmentInputs::new(2500.0, 0.0, Rate::from_percentage(7.0));
        let p = project(&inputs, default_inflation());
        assert_relative_eq!(p.future_value, 2500.0);
        assert_relative_eq!(p.future_real_value, 2500.0);
    }

    #[test]
    fn test_zero_rate_only_inflation_applies() {
        let fv = future_value(1000.0, 1.0, Rate::ZERO);
        assert_relative_eq!(fv, 1000.0);
        assert_relative_eq!(
            real_value(fv, 1.0, default_inflation()),
            1000.0 / 1.025,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_return_equal_to_inflation_preserves_real_value() {
        let inputs = InvestmentInputs::new(500.0, 12.0, default_inflation());
        let p = project(&inputs, default_inflation());
        assert_relative_eq!(p.future_real_value, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_amount() {
        let inputs = InvestmentInputs::new(0.0, 10.0, default_return_rate());
        let p = project(&inputs, default_inflation());
        assert_eq!(p.future_value, 0.0);
        assert_eq!(p.future_real_value, 0.0);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_return_rate().as_percentage(), 5.5);
        assert_eq!(default_inflation().as_percentage(), 2.5);
    }
}
