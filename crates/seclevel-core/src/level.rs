//! # Level Module
//!
//! The fixed six-value security ordinal.
//!
//! Ordering is defined by position in [`LEVEL_ORDER`], not by name.
//! Variant declaration order matches `LEVEL_ORDER`, so the discriminant
//! is the rank and the derived `Ord` agrees with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named point on the security scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Off,
    EssentiallyOff,
    Low,
    Medium,
    High,
    UnderAttack,
}

/// Every level, lowest first.
pub const LEVEL_ORDER: [Level; 6] = [
    Level::Off,
    Level::EssentiallyOff,
    Level::Low,
    Level::Medium,
    Level::High,
    Level::UnderAttack,
];

impl Level {
    /// The wire name accepted by the remote service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::EssentiallyOff => "essentially_off",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::UnderAttack => "under_attack",
        }
    }

    /// Look up a level by its wire name.
    ///
    /// Matching is exact: the remote service is case-sensitive, so
    /// `"High"` is not a level.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        LEVEL_ORDER.into_iter().find(|level| level.as_str() == name)
    }

    /// Index of this level in [`LEVEL_ORDER`].
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Comma-separated list of all wire names, lowest first.
    #[must_use]
    pub fn names() -> String {
        LEVEL_ORDER
            .iter()
            .map(|level| level.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name outside the fixed order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown security level '{0}'")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

// =============================================================================
// TARGET
// =============================================================================

/// A value the caller asked to write.
///
/// Parsing never fails. Names outside the fixed order become
/// [`Target::Unrecognized`], which only a forced transition may write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Known(Level),
    Unrecognized(String),
}

impl Target {
    /// Classify a raw name.
    pub fn parse(name: impl Into<String>) -> Self {
        let name = name.into();
        match Level::from_name(&name) {
            Some(level) => Self::Known(level),
            None => Self::Unrecognized(name),
        }
    }

    /// The recognized level, if any.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::Known(level) => Some(*level),
            Self::Unrecognized(_) => None,
        }
    }

    /// The value sent to the remote service.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(level) => level.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<Level> for Target {
    fn from(level: Level) -> Self {
        Self::Known(level)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn order_is_by_index_not_name() {
        // Alphabetically "essentially_off" < "high" < "low", which is not the scale.
        assert!(Level::EssentiallyOff.rank() < Level::Low.rank());
        assert!(Level::Low.rank() < Level::High.rank());
        assert_eq!(Level::Off.rank(), 0);
        assert_eq!(Level::UnderAttack.rank(), 5);
    }

    #[test]
    fn derived_ord_matches_level_order() {
        for pair in LEVEL_ORDER.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    #[test]
    fn rank_indexes_level_order() {
        for (i, level) in LEVEL_ORDER.into_iter().enumerate() {
            assert_eq!(level.rank(), i);
            assert_eq!(LEVEL_ORDER[level.rank()], level);
        }
    }

    #[test]
    fn from_name_round_trips_every_level() {
        for level in LEVEL_ORDER {
            assert_eq!(Level::from_name(level.as_str()), Some(level));
        }
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Level::from_name("High"), None);
        assert_eq!(Level::from_name(" low"), None);
        assert_eq!(Level::from_name("unknown_level"), None);
        assert_eq!(Level::from_name(""), None);
    }

    #[test]
    fn from_str_reports_the_bad_name() {
        let err = "critical".parse::<Level>().unwrap_err();
        assert_eq!(err, UnknownLevel("critical".to_string()));
        assert_eq!(err.to_string(), "unknown security level 'critical'");
    }

    #[test]
    fn names_lists_scale_lowest_first() {
        assert_eq!(
            Level::names(),
            "off, essentially_off, low, medium, high, under_attack"
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Level::UnderAttack).unwrap();
        assert_eq!(json, "\"under_attack\"");
        let level: Level = serde_json::from_str("\"essentially_off\"").unwrap();
        assert_eq!(level, Level::EssentiallyOff);
    }

    #[test]
    fn target_parse_classifies() {
        assert_eq!(Target::parse("medium"), Target::Known(Level::Medium));
        assert_eq!(
            Target::parse("bogus"),
            Target::Unrecognized("bogus".to_string())
        );
        assert_eq!(Target::parse("bogus").as_str(), "bogus");
        assert_eq!(Target::parse("bogus").level(), None);
        assert_eq!(Target::from(Level::High).to_string(), "high");
    }
}
