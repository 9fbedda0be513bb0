//! Crate-level error type.

use crate::validation::ValidationError;

/// Reasons a simulation or metric computation is refused.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set or policy parameters failed validation.
    InvalidInput(Vec<ValidationError>),
    /// A metric was requested over zero processes.
    EmptyInput,
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::EmptyInput => write!(f, "metrics are undefined for an empty process set"),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
