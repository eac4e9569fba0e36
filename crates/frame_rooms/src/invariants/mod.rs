//! First-class invariants for the fragment hunt.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and serve as documentation of system
//! guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
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

pub mod fragment_ledger;
pub mod pending_advance;
pub mod recorded_answers;

pub use fragment_ledger::FragmentLedgerInvariant;
pub use pending_advance::PendingAdvanceInvariant;
pub use recorded_answers::RecordedAnswersInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    FragmentLedgerInvariant,
    RecordedAnswersInvariant,
    PendingAdvanceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSession, RoomBook, RoomId};

    #[test]
    fn test_invariant_set_holds_for_fresh_session() {
        let session = GameSession::new(RoomBook::builtin());
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_across_play() {
        let mut session = GameSession::new(RoomBook::builtin());
        session.start("Ada").expect("Valid name");

        let answers = [
            (RoomId::One, "e"),
            (RoomId::Three, "stressed"),
            (RoomId::Two, "23"),
        ];
        for (room, answer) in answers {
            session.navigate(room).expect("Room is unlocked");
            assert!(session.submit_answer(room, answer).is_correct());
            assert!(SessionInvariants::check_all(&session).is_ok());
            session.apply_pending_advance();
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new(RoomBook::builtin());

        type TwoInvariants = (FragmentLedgerInvariant, RecordedAnswersInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
