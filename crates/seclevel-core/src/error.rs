//! # Error Module
//!
//! Failures of a single apply-level invocation.
//!
//! Every variant is terminal for the invocation. A transition declined by
//! the gate is not an error; see [`Outcome::Declined`](crate::Outcome::Declined).

use crate::level::Level;
use thiserror::Error;

/// Errors from applying a security level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The remote read failed or returned no usable value.
    #[error("Failed to get current security level: {0}")]
    FetchError(String),

    /// The remote service returned a value outside the fixed order.
    #[error("Current security level '{0}' is not valid")]
    InvalidCurrentLevel(String),

    /// The caller asked for a value outside the fixed order without forcing.
    #[error("Invalid security level '{0}'. Must be one of: {names}", names = Level::names())]
    InvalidTargetLevel(String),

    /// The remote write failed.
    #[error("Failed to update security level: {0}")]
    UpdateError(String),
}

impl GateError {
    /// Stable machine-readable name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FetchError(_) => "fetch_error",
            Self::InvalidCurrentLevel(_) => "invalid_current_level",
            Self::InvalidTargetLevel(_) => "invalid_target_level",
            Self::UpdateError(_) => "update_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_lists_levels() {
        let err = GateError::InvalidTargetLevel("critical".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid security level 'critical'. Must be one of: off, essentially_off, low, medium, high, under_attack"
        );
        assert_eq!(err.kind(), "invalid_target_level");
    }

    #[test]
    fn invalid_current_names_value() {
        let err = GateError::InvalidCurrentLevel("unknown_level".to_string());
        assert_eq!(
            err.to_string(),
            "Current security level 'unknown_level' is not valid"
        );
    }
}
