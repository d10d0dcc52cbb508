//! # Seclevel Core
//!
//! Pure decision logic for the zone security-level controller.
//!
//! The remote service stores a single `security_level` setting drawn from a
//! fixed, totally ordered scale. This crate decides whether a requested
//! value may replace the current one:
//!
//! ```text
//! off < essentially_off < low < medium < high < under_attack
//! ```
//!
//! A transition is allowed only when it strictly raises the level, unless
//! the caller forces it. Everything here is synchronous and side-effect free;
//! fetching and writing the setting is the job of the `seclevel` app.
//!
//! ## Example
//!
//! ```rust
//! use seclevel_core::{should_transition, Level};
//!
//! assert!(should_transition(Level::Low, Level::Medium, false));
//! assert!(!should_transition(Level::High, Level::Low, false));
//! assert!(should_transition(Level::High, Level::Low, true));
//! ```

pub mod error;
pub mod gate;
pub mod level;
pub mod outcome;

pub use error::GateError;
pub use gate::{should_transition, TransitionRequest};
pub use level::{Level, Target, LEVEL_ORDER};
pub use outcome::Outcome;

/// Identifier of the single remote setting managed by this system.
pub const SETTING_ID: &str = "security_level";

/// Level requested when the caller does not name one.
pub const DEFAULT_TARGET: Level = Level::Low;
