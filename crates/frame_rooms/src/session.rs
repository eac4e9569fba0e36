//! The game session controller: owns all mutable play state.

use std::collections::HashMap;

use derive_getters::Getters;
use serde::Serialize;
use strum::EnumCount;
use tracing::{debug, info, instrument, warn};

use crate::room::RoomBook;
use crate::types::{Fragment, RoomId};

/// Normalizes free text for answer comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Outcome of submitting an answer for a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer matched and the room is solved.
    Correct {
        /// Explanation text to show the player.
        explanation: String,
        /// Fragment newly acquired by this solve, if any.
        fragment_awarded: Option<Fragment>,
        /// Room the session will advance to after the pacing delay.
        advance_to: Option<RoomId>,
    },
    /// The answer did not match. Nothing changed.
    Incorrect,
}

impl SubmitOutcome {
    /// Whether the submission solved the room.
    pub fn is_correct(&self) -> bool {
        matches!(self, SubmitOutcome::Correct { .. })
    }
}

/// Errors that can occur when starting a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The supplied name was empty after trimming.
    EmptyName,
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::EmptyName => write!(f, "Name cannot be empty"),
        }
    }
}

impl std::error::Error for StartError {}

/// Errors that can occur when navigating between rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The final room is locked until enough fragments are held.
    FragmentsMissing {
        /// Fragments currently held.
        held: usize,
        /// Fragments required to unlock the final room.
        needed: usize,
    },
}

impl std::fmt::Display for GateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateError::FragmentsMissing { held, needed } => write!(
                f,
                "Collect all fragments before entering the final room ({}/{})",
                held, needed
            ),
        }
    }
}

impl std::error::Error for GateError {}

/// A single play-through of the fragment hunt.
///
/// The session is the only mutable state in the game. It is mutated
/// exclusively through [`GameSession::start`],
/// [`GameSession::submit_answer`], [`GameSession::navigate`], and
/// [`GameSession::apply_pending_advance`]; the presentation layer reads
/// snapshots and never writes.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct GameSession {
    /// The static room table.
    rooms: RoomBook,
    /// Player name. `None` until the session has started.
    username: Option<String>,
    /// The room currently shown to the player.
    current_room: RoomId,
    /// Fragments in acquisition order. Grows monotonically, no duplicates.
    fragments: Vec<Fragment>,
    /// Per-room solved flags. Monotonic false to true.
    completed: [bool; RoomId::COUNT],
    /// Literal text submitted when each room was solved. Storage only.
    answers: HashMap<RoomId, String>,
    /// At most one scheduled room advance.
    pending_advance: Option<RoomId>,
}

impl GameSession {
    /// Creates a fresh session over the given room table.
    #[instrument(skip(rooms))]
    pub fn new(rooms: RoomBook) -> Self {
        info!(fragment_goal = rooms.fragment_goal(), "Creating game session");
        Self {
            rooms,
            username: None,
            current_room: RoomId::One,
            fragments: Vec::new(),
            completed: [false; RoomId::COUNT],
            answers: HashMap::new(),
            pending_advance: None,
        }
    }

    /// Whether a username has been accepted and play has begun.
    pub fn started(&self) -> bool {
        self.username.is_some()
    }

    /// Starts the session with the given player name.
    ///
    /// The name is trimmed before storage. Rejects an empty name with no
    /// state change; the surrounding UI refuses the form silently.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::EmptyName`] if the trimmed name is empty.
    #[instrument(skip(self, name))]
    pub fn start(&mut self, name: &str) -> Result<(), StartError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            debug!("Rejecting empty username");
            return Err(StartError::EmptyName);
        }

        info!(username = %trimmed, "Session started");
        self.username = Some(trimmed.to_string());
        self.current_room = RoomId::One;
        Ok(())
    }

    /// Submits an answer for the given room.
    ///
    /// Comparison is exact after trimming and uppercasing both sides. On a
    /// match the room is marked solved (idempotent), its fragment is
    /// appended if not already held, the literal submission is recorded,
    /// and an advance to the next room is scheduled. A mismatch mutates
    /// nothing.
    ///
    /// Callers only submit for the room currently displayed; an arbitrary
    /// room id is a caller contract violation, not a runtime error.
    #[instrument(skip(self, raw), fields(room = %room))]
    pub fn submit_answer(&mut self, room: RoomId, raw: &str) -> SubmitOutcome {
        let spec = self.rooms.room(room);
        if normalize(raw) != normalize(spec.answer_key()) {
            debug!("Answer did not match");
            return SubmitOutcome::Incorrect;
        }

        let explanation = spec.explanation().clone();
        let award = *spec.fragment();

        self.completed[room.index()] = true;

        let fragment_awarded = match award {
            Some(fragment) if !self.fragments.contains(&fragment) => {
                self.fragments.push(fragment);
                Some(fragment)
            }
            _ => None,
        };

        self.answers.insert(room, raw.to_string());
        self.pending_advance = room.next();

        info!(
            fragments = self.fragments.len(),
            advance = ?self.pending_advance,
            "Room solved"
        );

        SubmitOutcome::Correct {
            explanation,
            fragment_awarded,
            advance_to: self.pending_advance,
        }
    }

    /// Navigates to the given room.
    ///
    /// Any non-final room is freely revisitable, solved or not. The final
    /// room is gated on the fragment count alone; the solved flags play no
    /// part in the gate.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::FragmentsMissing`] when the final room is
    /// locked. The session is unchanged in that case.
    #[instrument(skip(self), fields(room = %room))]
    pub fn navigate(&mut self, room: RoomId) -> Result<(), GateError> {
        let needed = self.rooms.fragment_goal();
        if room.is_final() && self.fragments.len() < needed {
            warn!(held = self.fragments.len(), needed, "Final room is gated");
            return Err(GateError::FragmentsMissing {
                held: self.fragments.len(),
                needed,
            });
        }

        debug!("Navigating");
        self.current_room = room;
        Ok(())
    }

    /// Applies the scheduled room advance, if one is pending.
    ///
    /// The pacing delay between a correct answer and this call belongs to
    /// the presentation layer; the session only tracks the single pending
    /// slot. Returns the room advanced to, or `None` if nothing was
    /// pending.
    #[instrument(skip(self))]
    pub fn apply_pending_advance(&mut self) -> Option<RoomId> {
        let target = self.pending_advance.take()?;
        self.current_room = target;
        info!(room = %target, "Advanced to next room");
        Some(target)
    }

    /// Whether the given room has been solved.
    pub fn is_completed(&self, room: RoomId) -> bool {
        self.completed[room.index()]
    }

    /// The literal answer recorded when the given room was solved.
    pub fn recorded_answer(&self, room: RoomId) -> Option<&str> {
        self.answers.get(&room).map(String::as_str)
    }

    /// Whether the closing message should be shown.
    ///
    /// Victory is a display condition, not a distinct state: the final
    /// room is current and solved.
    pub fn victory(&self) -> bool {
        self.current_room.is_final() && self.is_completed(self.current_room)
    }
}
