//! Error types for Andor
//!
//! Plan construction itself never fails. These errors come from the layers
//! around it: validation, walking a plan against observed outcomes, and
//! configuration.

use thiserror::Error;

/// Result type alias using Andor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Andor error types with helpful messages and suggestions
#[derive(Error, Debug)]
pub enum Error {
    // Plan structure errors (E001-E099)
    #[error("Invalid plan ({field}): {message}")]
    Validation { field: String, message: String },

    #[error("Conditional step has no branches; it cannot dispatch any outcome.")]
    EmptyConditional,

    // Execution errors (E100-E199)
    #[error("Observed outcome '{0}' has no branch in the current conditional step.")]
    UnmatchedOutcome(String),

    #[error("Plan is waiting for an observed outcome before it can continue.")]
    AwaitingOutcome,

    #[error("No conditional step is pending; there is nothing to dispatch an outcome on.")]
    NoPendingConditional,

    // Config errors (E600-E699)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "E001",
            Self::EmptyConditional => "E002",
            Self::UnmatchedOutcome(_) => "E100",
            Self::AwaitingOutcome => "E101",
            Self::NoPendingConditional => "E102",
            Self::ConfigError(_) => "E600",
        }
    }

    /// Get suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::EmptyConditional => {
                Some("Add a branch for every outcome the preceding action can produce".to_string())
            }
            Self::UnmatchedOutcome(outcome) => Some(format!(
                "Replan from the observed outcome '{}' or add a branch for it",
                outcome
            )),
            Self::AwaitingOutcome => {
                Some("Call observe() with the outcome that occurred".to_string())
            }
            Self::ConfigError(_) => {
                Some("Check config.toml in the andor config directory".to_string())
            }
            _ => None,
        }
    }

    /// Whether a caller can recover by replanning from the current state
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnmatchedOutcome(_) | Self::AwaitingOutcome)
    }
}
