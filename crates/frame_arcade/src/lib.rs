//! Frame Arcade: terminal client for the six-room fragment hunt.
//!
//! The game logic lives in `frame_rooms`; this crate supplies the room
//! content pipeline (TOML assets) and the ratatui presentation layer. The
//! presentation reads session snapshots and feeds key events back into the
//! controller operations; it owns no game state of its own beyond input
//! buffers and feedback text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod content;
mod tui;

// Crate-level exports - room content loading
pub use content::{ContentError, RoomFile};

// Crate-level exports - terminal UI entry point
pub use tui::run_tui;
