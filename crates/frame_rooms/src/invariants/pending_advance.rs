//! Pending advance invariant: advances only follow solved rooms.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::{GameSession, RoomId};

/// Invariant: a pending advance targets the successor of a solved room.
///
/// Advances are only ever scheduled by a successful solve, so the room
/// before the target must be marked completed. At most one advance is
/// pending at a time by construction (a single slot).
pub struct PendingAdvanceInvariant;

impl Invariant<GameSession> for PendingAdvanceInvariant {
    fn holds(session: &GameSession) -> bool {
        match session.pending_advance() {
            None => true,
            Some(target) => RoomId::iter()
                .any(|room| room.next() == Some(*target) && session.is_completed(room)),
        }
    }

    fn description() -> &'static str {
        "A pending advance targets the successor of a solved room"
    }
}
