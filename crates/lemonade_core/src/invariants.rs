//! First-class invariants for lemonade sessions.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`SessionState`]. They are testable independently and checked by the
//! state machine in debug builds.

use super::{SQUEEZE_TARGET_RANGE, SessionState, Step};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so invariants compose without allocation.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The squeeze target is always drawn from [`SQUEEZE_TARGET_RANGE`].
pub struct SqueezeTargetInRange;

impl Invariant<SessionState> for SqueezeTargetInRange {
    fn holds(state: &SessionState) -> bool {
        SQUEEZE_TARGET_RANGE.contains(&state.progress().target())
    }

    fn description() -> &'static str {
        "Squeeze target must be between 2 and 4"
    }
}

/// While squeezing, the lemon has not yet been squeezed enough.
///
/// Reaching the target moves the session to `Drink` on the same tap, so
/// a Squeeze state with `count >= target` is unreachable.
pub struct SqueezeCountBelowTarget;

impl Invariant<SessionState> for SqueezeCountBelowTarget {
    fn holds(state: &SessionState) -> bool {
        state.step() != Step::Squeeze || !state.progress().is_complete()
    }

    fn description() -> &'static str {
        "Squeeze count must stay below target while squeezing"
    }
}

/// All lemonade invariants as a composable set.
pub type LemonadeInvariants = (SqueezeTargetInRange, SqueezeCountBelowTarget);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqueezeProgress;

    #[test]
    fn test_invariants_hold_for_reachable_states() {
        for target in SQUEEZE_TARGET_RANGE {
            for count in 0..target {
                let state = SessionState::new(Step::Squeeze, SqueezeProgress::new(count, target));
                assert!(LemonadeInvariants::check_all(&state).is_ok());
            }
            // Stale counter after leaving Squeeze is fine.
            let state = SessionState::new(Step::Drink, SqueezeProgress::new(target, target));
            assert!(LemonadeInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_detects_finished_squeeze_still_squeezing() {
        let state = SessionState::new(Step::Squeeze, SqueezeProgress::new(3, 3));
        let violations = LemonadeInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            SqueezeCountBelowTarget::description()
        );
    }

    #[test]
    fn test_detects_out_of_range_target() {
        let state = SessionState::new(Step::Squeeze, SqueezeProgress::new(7, 5));
        let violations = LemonadeInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
