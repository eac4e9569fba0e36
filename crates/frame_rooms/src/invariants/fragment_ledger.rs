//! Fragment ledger invariant: held fragments mirror solved rooms.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::{GameSession, RoomId};

/// Invariant: the fragment ledger is consistent with the solved flags.
///
/// Held fragments are pairwise distinct, every held fragment is the award
/// of some room, and a room's award is held exactly when that room is
/// marked completed.
pub struct FragmentLedgerInvariant;

impl Invariant<GameSession> for FragmentLedgerInvariant {
    fn holds(session: &GameSession) -> bool {
        let fragments = session.fragments();

        // No duplicates regardless of resubmission patterns.
        for (i, fragment) in fragments.iter().enumerate() {
            if fragments[..i].contains(fragment) {
                return false;
            }
        }

        // Every held fragment is awarded by some room in the table.
        for fragment in fragments {
            let awarded = RoomId::iter()
                .any(|id| session.rooms().room(id).fragment() == &Some(*fragment));
            if !awarded {
                return false;
            }
        }

        // A room's award is held exactly when the room is solved.
        for id in RoomId::iter() {
            if let Some(fragment) = session.rooms().room(id).fragment() {
                if session.is_completed(id) != fragments.contains(fragment) {
                    return false;
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Held fragments are distinct and mirror the solved rooms"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoomBook;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new(RoomBook::builtin());
        assert!(FragmentLedgerInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_solves_hold() {
        let mut session = GameSession::new(RoomBook::builtin());
        session.start("Ada").expect("Valid name");

        for _ in 0..3 {
            assert!(session.submit_answer(RoomId::One, "E").is_correct());
        }

        assert_eq!(session.fragments().len(), 1);
        assert!(FragmentLedgerInvariant::holds(&session));
    }

    #[test]
    fn test_out_of_order_solves_hold() {
        let mut session = GameSession::new(RoomBook::builtin());
        session.start("Ada").expect("Valid name");

        assert!(session.submit_answer(RoomId::Five, "eve").is_correct());
        assert!(session.submit_answer(RoomId::Two, "23").is_correct());

        assert_eq!(session.fragments().len(), 2);
        assert!(FragmentLedgerInvariant::holds(&session));
    }
}
