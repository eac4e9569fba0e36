//! Screen trait and transition type for the arcade state machine.

use crossterm::event::KeyEvent;
use frame_rooms::GameSession;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`ArcadeController`](crate::tui::controller::ArcadeController) state
/// machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Leave the welcome screen and enter the rooms.
    EnterRooms,
    /// Exit the game cleanly.
    Quit,
}

/// Trait implemented by each screen in the arcade state machine.
///
/// Each screen owns its own presentation state (input buffers, feedback
/// text), renders its UI from a session snapshot, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition;
}
