//! Screens of the arcade state machine.

mod room;
mod welcome;

pub use room::RoomScreen;
pub use welcome::WelcomeScreen;
