//! # Outcome Module
//!
//! Structured result of a completed apply-level invocation.
//!
//! The core never prints. Callers render an `Outcome` as one status line
//! (`Display`) or as JSON (`Serialize`).

use crate::level::{Level, Target};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an invocation ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The remote setting was written.
    Updated { from: Level, to: Target },
    /// The gate refused the transition; nothing was written.
    Declined { current: Level, attempted: Level },
    /// The gate allowed the transition but the write was suppressed (dry run).
    Skipped { current: Level, would_write: Target },
}

impl Outcome {
    /// True if the remote setting changed.
    #[must_use]
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// True if the gate refused the transition.
    #[must_use]
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated { to, .. } => {
                write!(f, "Successfully updated security level to: {to}")
            }
            Self::Declined { current, attempted } => write!(
                f,
                "Update cancelled. New value '{attempted}' is not higher than current level ({current}). Use --force to override."
            ),
            Self::Skipped {
                current,
                would_write,
            } => write!(
                f,
                "Dry run: would update security level from {current} to {would_write}"
            ),
        }
    }
}
