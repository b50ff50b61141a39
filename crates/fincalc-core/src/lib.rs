//! # fincalc Core
//!
//! Formulas, rate types, and input parsing for the fincalc console tools.
//!
//! - **Investment projection**: nominal and inflation-adjusted future value
//! - **Profit calculation**: earnings before tax, after-tax profit, and their ratio
//! - **Input parsing**: console text to `f64`, with an explicit error on bad input
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let inputs = InvestmentInputs::new(1000.0, 10.0, Rate::from_percentage(5.5));
//! let projection = project(&inputs, default_inflation());
//! assert!(projection.future_value > projection.future_real_value);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod input;
pub mod investment;
pub mod profit;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FinCalcError, FinCalcResult};
    pub use crate::input::{parse_value, Field};
    pub use crate::investment::{
        default_inflation, default_return_rate, project, InvestmentInputs, InvestmentProjection,
    };
    pub use crate::profit::{calculate, ProfitInputs, ProfitReport};
    pub use crate::types::Rate;
}

// Re-export commonly used types at crate root
pub use error::{FinCalcError, FinCalcResult};
pub use types::Rate;
