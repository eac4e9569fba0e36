//! Static room definitions and the validated room table.

use crate::types::{Fragment, RoomId};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumCount;
use tracing::{debug, instrument};

/// Immutable definition of a single room.
///
/// Rooms are display content plus one answer key. The controller never
/// inspects anything beyond `answer_key` and `fragment`, so alternate
/// puzzle sets can be swapped in without touching the state machine.
#[derive(Debug, Clone, Getters, Serialize, Deserialize, new)]
pub struct RoomSpec {
    /// Display title.
    title: String,
    /// Flavor text shown above the puzzle.
    description: String,
    /// The riddle presented to the player.
    puzzle: String,
    /// Canonical expected answer (compared trimmed and case-insensitive).
    answer_key: String,
    /// Token granted on success. The final room awards none.
    fragment: Option<Fragment>,
    /// Text shown when the room is solved.
    explanation: String,
}

/// Errors raised when assembling a room table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomBookError {
    /// The table did not contain exactly six rooms.
    WrongRoomCount(usize),
    /// The final combination room must not award a fragment.
    FinalRoomAwardsFragment,
    /// Two rooms award the same fragment token.
    DuplicateFragment(Fragment),
}

impl std::fmt::Display for RoomBookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomBookError::WrongRoomCount(found) => {
                write!(f, "Expected {} rooms, found {}", RoomId::COUNT, found)
            }
            RoomBookError::FinalRoomAwardsFragment => {
                write!(f, "The final room must not award a fragment")
            }
            RoomBookError::DuplicateFragment(fragment) => {
                write!(f, "Fragment '{}' is awarded by more than one room", fragment)
            }
        }
    }
}

impl std::error::Error for RoomBookError {}

/// The fixed table of six rooms, indexed by [`RoomId`].
#[derive(Debug, Clone, Serialize)]
pub struct RoomBook {
    rooms: Vec<RoomSpec>,
}

impl RoomBook {
    /// Builds a room table, validating the content contract.
    ///
    /// # Errors
    ///
    /// Returns [`RoomBookError`] if the table does not hold exactly six
    /// rooms, the final room awards a fragment, or two rooms award the
    /// same fragment.
    #[instrument(skip(rooms))]
    pub fn new(rooms: Vec<RoomSpec>) -> Result<Self, RoomBookError> {
        if rooms.len() != RoomId::COUNT {
            return Err(RoomBookError::WrongRoomCount(rooms.len()));
        }

        let (last, earlier) = rooms.split_last().expect("six rooms");
        if last.fragment().is_some() {
            return Err(RoomBookError::FinalRoomAwardsFragment);
        }

        let mut seen = Vec::new();
        for room in earlier {
            if let Some(fragment) = room.fragment() {
                if seen.contains(fragment) {
                    return Err(RoomBookError::DuplicateFragment(*fragment));
                }
                seen.push(*fragment);
            }
        }

        debug!(fragment_goal = seen.len(), "Room table validated");
        Ok(Self { rooms })
    }

    /// Returns the room definition for the given id.
    pub fn room(&self, id: RoomId) -> &RoomSpec {
        &self.rooms[id.index()]
    }

    /// Number of fragments a player must collect to unlock the final room.
    pub fn fragment_goal(&self) -> usize {
        self.rooms
            .iter()
            .filter(|room| room.fragment().is_some())
            .count()
    }

    /// The built-in riddle set.
    pub fn builtin() -> Self {
        let rooms = vec![
            RoomSpec::new(
                "The Paradox Cipher".to_string(),
                "A cryptic inscription reads: \"I am the beginning of eternity, the end of \
                 time and space, the beginning of every end, and the end of every place.\" \
                 Solve the riddle to claim your first fragment."
                    .to_string(),
                "What letter am I?".to_string(),
                "E".to_string(),
                Some(Fragment::new('1')),
                "The letter \"E\" appears at the beginning and end of the words described. \
                 The answer was hidden in plain sight."
                    .to_string(),
            ),
            RoomSpec::new(
                "The Forgotten Constellation".to_string(),
                "An ancient star map shows a constellation with coordinates. Each star is \
                 labeled with a number sequence that forms a pattern."
                    .to_string(),
                "2, 3, 5, 7, 11, 13, 17, 19, __. What is the next number in this celestial \
                 sequence?"
                    .to_string(),
                "23".to_string(),
                Some(Fragment::new('I')),
                "The sequence follows prime numbers. The next prime after 19 is 23.".to_string(),
            ),
            RoomSpec::new(
                "The Reflection Paradox".to_string(),
                "A mirror room where words appear backwards. One phrase is written: \
                 \"DESSERTS\" - but when you look at its reflection..."
                    .to_string(),
                "What word appears when you reverse \"DESSERTS\"?".to_string(),
                "STRESSED".to_string(),
                Some(Fragment::new('H')),
                "Sometimes what seems sweet is actually the opposite when viewed from \
                 another perspective."
                    .to_string(),
            ),
            RoomSpec::new(
                "The Silent Symphony".to_string(),
                "A musical staff with one rest in an otherwise complete measure.".to_string(),
                "In music, what symbol represents complete silence?".to_string(),
                "REST".to_string(),
                Some(Fragment::new('_')),
                "Silence is as important as sound in music.".to_string(),
            ),
            RoomSpec::new(
                "The Empty List".to_string(),
                "A census of names, but one line remains blank.".to_string(),
                "Names: Alice, Bob, Charlie, Dave, _____. The pattern reveals the missing \
                 name."
                    .to_string(),
                "EVE".to_string(),
                Some(Fragment::new('R')),
                "Every list has gaps we must discover to complete.".to_string(),
            ),
            RoomSpec::new(
                "THE MISSING FRAME".to_string(),
                "You have collected fragments from each room. Arrange them to reveal the \
                 final answer."
                    .to_string(),
                "Combine your fragments in order to spell the word.".to_string(),
                "1IH_R".to_string(),
                None,
                "The answer was always \"HIRING\" - you just needed to see the complete \
                 picture."
                    .to_string(),
            ),
        ];

        Self::new(rooms).expect("Built-in rooms must satisfy the content contract")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_room(fragment: Option<char>) -> RoomSpec {
        RoomSpec::new(
            "Room".to_string(),
            "Description".to_string(),
            "Puzzle".to_string(),
            "ANSWER".to_string(),
            fragment.map(Fragment::new),
            "Explanation".to_string(),
        )
    }

    #[test]
    fn test_builtin_book_is_valid() {
        let book = RoomBook::builtin();
        assert_eq!(book.fragment_goal(), 5);
        assert_eq!(book.room(RoomId::One).answer_key(), "E");
        assert!(book.room(RoomId::Six).fragment().is_none());
    }

    #[test]
    fn test_wrong_room_count_rejected() {
        let result = RoomBook::new(vec![stub_room(Some('A'))]);
        assert_eq!(result.unwrap_err(), RoomBookError::WrongRoomCount(1));
    }

    #[test]
    fn test_final_room_fragment_rejected() {
        let rooms = vec![
            stub_room(Some('A')),
            stub_room(Some('B')),
            stub_room(Some('C')),
            stub_room(Some('D')),
            stub_room(Some('E')),
            stub_room(Some('F')),
        ];
        let result = RoomBook::new(rooms);
        assert_eq!(result.unwrap_err(), RoomBookError::FinalRoomAwardsFragment);
    }

    #[test]
    fn test_duplicate_fragment_rejected() {
        let rooms = vec![
            stub_room(Some('A')),
            stub_room(Some('B')),
            stub_room(Some('A')),
            stub_room(Some('D')),
            stub_room(Some('E')),
            stub_room(None),
        ];
        let result = RoomBook::new(rooms);
        assert_eq!(
            result.unwrap_err(),
            RoomBookError::DuplicateFragment(Fragment::new('A'))
        );
    }
}
