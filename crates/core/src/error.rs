//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic input/invariant failures live here. Degenerate but
/// well-typed inputs (no consumption history, zero holding cost) are not
/// errors; callers get a zeroed result instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (negative stock, out-of-range percentage, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two inputs that must agree do not (e.g. item vs. ingredient).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Reject NaN/infinite and negative magnitudes.
pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be finite (got {value})")));
    }
    if value < 0.0 {
        return Err(DomainError::validation(format!("{field} cannot be negative (got {value})")));
    }
    Ok(())
}

/// Reject values outside the closed unit interval.
pub fn ensure_fraction(field: &str, value: f64) -> DomainResult<()> {
    if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
        return Err(DomainError::validation(format!(
            "{field} must be within [0, 1] (got {value})"
        )));
    }
    Ok(())
}
