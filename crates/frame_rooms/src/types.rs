//! Core domain types for the fragment hunt.

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};

/// Identifier for one of the six rooms, in visit order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter,
)]
pub enum RoomId {
    /// The first room.
    One,
    /// The second room.
    Two,
    /// The third room.
    Three,
    /// The fourth room.
    Four,
    /// The fifth room.
    Five,
    /// The final combination room.
    Six,
}

impl RoomId {
    /// Returns the room number in 1..=6.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the room for the given number in 1..=6.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    /// Returns the zero-based index, for table lookups.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the next room in visit order, if any.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Returns the previous room in visit order, if any.
    pub fn previous(self) -> Option<Self> {
        Self::from_number(self.number().wrapping_sub(1))
    }

    /// Whether this is the final combination room.
    pub fn is_final(self) -> bool {
        self.next().is_none()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room {}", self.number())
    }
}

/// A single-character token awarded for solving a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment(char);

impl Fragment {
    /// Creates a fragment from its character token.
    pub fn new(token: char) -> Self {
        Self(token)
    }

    /// Returns the character token.
    pub fn token(self) -> char {
        self.0
    }
}

impl From<char> for Fragment {
    fn from(token: char) -> Self {
        Self::new(token)
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_round_trip() {
        for room in RoomId::iter() {
            assert_eq!(RoomId::from_number(room.number()), Some(room));
        }
        assert_eq!(RoomId::from_number(0), None);
        assert_eq!(RoomId::from_number(7), None);
    }

    #[test]
    fn test_next_walks_visit_order() {
        assert_eq!(RoomId::One.next(), Some(RoomId::Two));
        assert_eq!(RoomId::Five.next(), Some(RoomId::Six));
        assert_eq!(RoomId::Six.next(), None);
    }

    #[test]
    fn test_previous_walks_backwards() {
        assert_eq!(RoomId::One.previous(), None);
        assert_eq!(RoomId::Six.previous(), Some(RoomId::Five));
    }

    #[test]
    fn test_only_last_room_is_final() {
        let finals: Vec<_> = RoomId::iter().filter(|r| r.is_final()).collect();
        assert_eq!(finals, vec![RoomId::Six]);
    }
}
