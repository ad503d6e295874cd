//! Configuration validation.
//!
//! Checks a [`GeneratorConfig`] before any random draw is made. Detects:
//! - Zero tracks
//! - Negative or inverted spacing ranges
//! - Empty, non-positive, or duplicated duration sets
//! - Non-positive overlap bounds
//!
//! All problems are collected, not just the first one, and each error
//! names the parameter at fault.

use std::collections::HashSet;
use std::fmt;

use crate::config::GeneratorConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Configuration field at fault.
    pub parameter: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `tracks` is zero.
    NoTracks,
    /// The spacing range is negative or inverted.
    InvalidSpacing,
    /// The duration set is empty.
    EmptyDurationSet,
    /// A duration is zero or negative.
    NonPositiveDuration,
    /// A duration appears twice.
    DuplicateDuration,
    /// The overlap bound admits no overlap at all.
    NonPositiveOverlapBound,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        parameter: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            parameter,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` {}", self.parameter, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a generator configuration.
///
/// Checks:
/// 1. At least one track
/// 2. `0 <= spacing_min <= spacing_max`
/// 3. A non-empty duration set of distinct positive values
/// 4. `max_overlap > 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.tracks == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTracks,
            "tracks",
            "must be at least 1",
        ));
    }

    if config.spacing_min < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSpacing,
            "spacing_min",
            format!("must be non-negative, got {}", config.spacing_min),
        ));
    }
    if config.spacing_min > config.spacing_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSpacing,
            "spacing_max",
            format!(
                "must be at least spacing_min {}, got {}",
                config.spacing_min, config.spacing_max
            ),
        ));
    }

    if config.durations.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDurationSet,
            "durations",
            "must not be empty",
        ));
    }
    let mut seen = HashSet::new();
    for &d in &config.durations {
        if d <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                "durations",
                format!("must be positive, got {d}"),
            ));
        } else if !seen.insert(d) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDuration,
                "durations",
                format!("contains {d} more than once"),
            ));
        }
    }

    if config.max_overlap <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveOverlapBound,
            "max_overlap",
            format!("must be positive, got {}", config.max_overlap),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
