//! Error types for the NutriCalc calculator

use thiserror::Error;

/// Errors raised while validating input or running a calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// One or more required fields were absent or zero
    #[error("Incomplete data: missing {}", .missing.join(", "))]
    IncompleteData { missing: Vec<&'static str> },

    /// A field was present but outside the plausible range
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Arithmetic produced a non-finite value
    #[error("Calculation failed: {0}")]
    Computation(String),
}

impl CalculationError {
    /// Field the error relates to, when there is exactly one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalculationError::IncompleteData { missing } if missing.len() == 1 => {
                Some(missing[0])
            }
            CalculationError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}
