//! Error types for timeline generation.
//!
//! Only two things can fail: argument checks on the low-level primitives
//! (partitioning, interval construction) and configuration validation.
//! Rejected overlap trials are ordinary outcomes, not errors; see
//! [`Rejection`](crate::generator::Rejection).

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GanttError>;

/// Errors produced by the generator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GanttError {
    /// A primitive was called outside its input domain.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        parameter: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The generator configuration failed validation.
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),
}

impl GanttError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

impl From<Vec<ValidationError>> for GanttError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfig(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
