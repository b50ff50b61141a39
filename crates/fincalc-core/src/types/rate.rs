//! Percentage rate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An annual rate expressed in percent.
///
/// Both tools take rates the way people type them: `5.5` means 5.5 %.
///
/// # Example
///
/// ```rust
/// use fincalc_core::types::Rate;
///
/// let rate = Rate::from_percentage(5.5);
/// assert_eq!(rate.as_percentage(), 5.5);
/// assert!((rate.as_fraction() - 0.055).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// Rate in percent (5.5 = 5.5%)
    percentage: f64,
}

impl Rate {
    /// Zero percent.
    pub const ZERO: Rate = Rate { percentage: 0.0 };

    /// Creates a rate from a percentage value.
    #[must_use]
    pub const fn from_percentage(percentage: f64) -> Self {
        Self { percentage }
    }

    /// Returns the rate in percent.
    #[must_use]
    pub fn as_percentage(&self) -> f64 {
        self.percentage
    }

    /// Returns the rate as a fraction (5.5% = 0.055).
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        self.percentage / 100.0
    }

    /// Compound growth factor over `years` with annual compounding:
    /// `(1 + rate)^years`.
    #[must_use]
    pub fn growth_factor(&self, years: f64) -> f64 {
        (1.0 + self.as_fraction()).powf(years)
    }

    /// The share that remains after deducting this rate: `1 - rate`.
    #[must_use]
    pub fn complement(&self) -> f64 {
        1.0 - self.as_fraction()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage)
    }
}
