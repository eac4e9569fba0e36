//! Room content loading from TOML assets.
//!
//! The room table is content data, not logic. A content file holds a
//! `[[rooms]]` array of six room definitions; the built-in riddle set is
//! used when no file is supplied.

use derive_more::{Display, Error};
use frame_rooms::{RoomBook, RoomSpec};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// On-disk shape of a room-content file.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomFile {
    /// Room definitions in visit order.
    pub rooms: Vec<RoomSpec>,
}

impl RoomFile {
    /// Loads and validates a room table from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<RoomBook, ContentError> {
        debug!("Loading room content from file");
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ContentError::new(format!("Failed to read content file: {}", e)))?;

        Self::from_toml(&text)
    }

    /// Parses and validates a room table from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml(text: &str) -> Result<RoomBook, ContentError> {
        let file: Self = toml::from_str(text)
            .map_err(|e| ContentError::new(format!("Failed to parse content: {}", e)))?;

        let book = RoomBook::new(file.rooms)
            .map_err(|e| ContentError::new(format!("Invalid room table: {}", e)))?;

        info!(fragment_goal = book.fragment_goal(), "Room content loaded");
        Ok(book)
    }
}

/// Content loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Content error: {} at {}:{}", message, file, line)]
pub struct ContentError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ContentError {
    /// Creates a new content error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
