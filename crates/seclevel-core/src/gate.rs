//! # Gate Module
//!
//! The monotonic transition gate.
//!
//! A level may only be raised. Lowering it, or re-applying the current
//! level, is declined unless the caller forces the transition.

use crate::level::Level;

/// Decide whether `current` may be replaced by `target`.
///
/// Returns true if `target` ranks strictly above `current` in
/// [`LEVEL_ORDER`](crate::LEVEL_ORDER), or if `forced` is set.
#[must_use]
pub fn should_transition(current: Level, target: Level, forced: bool) -> bool {
    forced || target.rank() > current.rank()
}

/// A proposed change of the security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub current: Level,
    pub target: Level,
    pub forced: bool,
}

impl TransitionRequest {
    pub fn new(current: Level, target: Level, forced: bool) -> Self {
        Self {
            current,
            target,
            forced,
        }
    }

    /// Apply the gate to this request.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        should_transition(self.current, self.target, self.forced)
    }

    /// True if the request would lower the level.
    #[must_use]
    pub fn is_downgrade(&self) -> bool {
        self.target.rank() < self.current.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LEVEL_ORDER;

    #[test]
    fn raising_is_allowed() {
        assert!(should_transition(Level::Low, Level::Medium, false));
        assert!(should_transition(Level::Off, Level::UnderAttack, false));
    }

    #[test]
    fn lowering_is_declined() {
        assert!(!should_transition(Level::High, Level::Low, false));
        assert!(!should_transition(Level::EssentiallyOff, Level::Off, false));
    }

    #[test]
    fn same_level_is_declined() {
        for level in LEVEL_ORDER {
            assert!(!should_transition(level, level, false));
        }
    }

    #[test]
    fn exhaustive_pairs_follow_rank() {
        for (i, current) in LEVEL_ORDER.into_iter().enumerate() {
            for (j, target) in LEVEL_ORDER.into_iter().enumerate() {
                assert_eq!(should_transition(current, target, false), j > i);
                assert!(should_transition(current, target, true));
            }
        }
    }

    #[test]
    fn request_delegates_to_gate() {
        let req = TransitionRequest::new(Level::High, Level::Low, false);
        assert!(!req.is_allowed());
        assert!(req.is_downgrade());

        let forced = TransitionRequest { forced: true, ..req };
        assert!(forced.is_allowed());
    }
}
