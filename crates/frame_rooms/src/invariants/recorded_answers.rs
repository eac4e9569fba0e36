//! Recorded answers invariant: solved rooms replay against their keys.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::session::normalize;
use crate::{GameSession, RoomId};

/// Invariant: the answer record is consistent with the solved flags.
///
/// A room has a recorded answer exactly when it is marked completed, and
/// every recorded answer normalizes to that room's answer key. This is the
/// replay check: the solved flags can be reconstructed from the record.
pub struct RecordedAnswersInvariant;

impl Invariant<GameSession> for RecordedAnswersInvariant {
    fn holds(session: &GameSession) -> bool {
        for id in RoomId::iter() {
            match session.recorded_answer(id) {
                Some(answer) => {
                    if !session.is_completed(id) {
                        return false;
                    }
                    if normalize(answer) != normalize(session.rooms().room(id).answer_key()) {
                        return false;
                    }
                }
                None => {
                    if session.is_completed(id) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn description() -> &'static str {
        "Every solved room has a recorded answer matching its key"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoomBook;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new(RoomBook::builtin());
        assert!(RecordedAnswersInvariant::holds(&session));
    }

    #[test]
    fn test_messy_submissions_hold() {
        let mut session = GameSession::new(RoomBook::builtin());
        session.start("Ada").expect("Valid name");

        assert!(session.submit_answer(RoomId::One, "  e  ").is_correct());
        assert!(session.submit_answer(RoomId::Three, "Stressed").is_correct());

        assert_eq!(session.recorded_answer(RoomId::One), Some("  e  "));
        assert!(RecordedAnswersInvariant::holds(&session));
    }

    #[test]
    fn test_rejected_submissions_leave_no_record() {
        let mut session = GameSession::new(RoomBook::builtin());
        session.start("Ada").expect("Valid name");

        assert!(!session.submit_answer(RoomId::One, "X").is_correct());

        assert_eq!(session.recorded_answer(RoomId::One), None);
        assert!(RecordedAnswersInvariant::holds(&session));
    }
}
