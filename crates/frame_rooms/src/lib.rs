//! Frame Rooms: pure game logic for the fragment hunt.
//!
//! Six rooms, each holding a riddle. A correct answer marks the room
//! solved and awards a single-character fragment; collecting every
//! fragment unlocks the final combination room and its closing message.
//!
//! # Architecture
//!
//! - **Rooms**: the static, validated content table ([`RoomBook`])
//! - **Session**: the controller owning all mutable play state
//!   ([`GameSession`])
//! - **Invariants**: first-class, independently testable guarantees
//!   ([`invariants`])
//!
//! Rendering is a pure projection of session snapshots and lives in the
//! `frame_arcade` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod room;
mod session;
mod types;

pub mod invariants;

// Crate-level exports - room content
pub use room::{RoomBook, RoomBookError, RoomSpec};

// Crate-level exports - session controller
pub use session::{GameSession, GateError, StartError, SubmitOutcome};

// Crate-level exports - domain types
pub use types::{Fragment, RoomId};
