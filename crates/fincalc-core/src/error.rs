//! Error types for the fincalc library.
//!
//! Reading a number from the console is the only fallible step in either
//! tool; the formulas themselves never fail (a zero profit yields a
//! non-finite ratio rather than an error).

use thiserror::Error;

use crate::input::Field;

/// A specialized Result type for fincalc operations.
pub type FinCalcResult<T> = Result<T, FinCalcError>;

/// The main error type for fincalc operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinCalcError {
    /// The text supplied for a field is not a finite number.
    #[error("Invalid {field}: '{input}' is not a number")]
    InvalidInput {
        /// Field being read.
        field: Field,
        /// The offending text, trimmed.
        input: String,
    },

    /// No value was supplied for a field that has no default.
    #[error("Missing {field}: no value was entered")]
    MissingInput {
        /// Field being read.
        field: Field,
    },
}

impl FinCalcError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: Field, input: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            input: input.into(),
        }
    }

    /// Creates a missing input error.
    #[must_use]
    pub fn missing_input(field: Field) -> Self {
        Self::MissingInput { field }
    }

    /// Returns the field the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidInput { field, .. } | Self::MissingInput { field } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinCalcError::invalid_input(Field::Revenue, "ten");
        assert_eq!(err.to_string(), "Invalid revenue: 'ten' is not a number");
    }

    #[test]
    fn test_missing_display() {
        let err = FinCalcError::missing_input(Field::NumberOfYears);
        assert!(err.to_string().contains("number of years"));
        assert_eq!(err.field(), Field::NumberOfYears);
    }
}
