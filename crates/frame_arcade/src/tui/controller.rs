//! Arcade controller: drives the screen state machine and the pacing timer.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use frame_rooms::GameSession;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{RoomScreen, WelcomeScreen};

/// Active screen in the arcade state machine.
#[derive(Debug)]
enum ActiveScreen {
    Welcome(WelcomeScreen),
    Room(RoomScreen),
}

/// Controller that drives the arcade state machine.
///
/// Owns the [`GameSession`] and the single pacing deadline: when a solve
/// schedules a room advance, the controller arms a deadline and applies
/// the advance from its own event loop once the delay elapses. At most one
/// deadline is armed at a time; no background task is spawned.
#[derive(Debug, Getters)]
pub struct ArcadeController {
    session: GameSession,
    advance_delay: Duration,
    #[getter(skip)]
    advance_deadline: Option<Instant>,
}

impl ArcadeController {
    /// Creates a new arcade controller.
    #[instrument(skip(session))]
    pub fn new(session: GameSession, advance_delay: Duration) -> Self {
        info!(delay_ms = advance_delay.as_millis() as u64, "Creating ArcadeController");
        Self {
            session,
            advance_delay,
            advance_deadline: None,
        }
    }

    /// Runs the arcade event loop until the player quits.
    ///
    /// Renders the active screen, polls for input with a short timeout to
    /// keep the loop responsive, and lands any due room advance.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting arcade event loop");

        let mut screen = ActiveScreen::Welcome(WelcomeScreen::new());

        loop {
            // Land a due room advance before drawing.
            if let Some(deadline) = self.advance_deadline
                && Instant::now() >= deadline
            {
                self.advance_deadline = None;
                if let Some(room) = self.session.apply_pending_advance()
                    && let ActiveScreen::Room(s) = &mut screen
                {
                    s.on_advanced(room);
                }
            }

            // Render current screen.
            terminal.draw(|f| match &screen {
                ActiveScreen::Welcome(s) => s.render(f, &self.session),
                ActiveScreen::Room(s) => s.render(f, &self.session),
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Welcome(s) => s.handle_key(key, &mut self.session),
                    ActiveScreen::Room(s) => s.handle_key(key, &mut self.session),
                };

                // Arm the pacing timer when a solve scheduled an advance.
                if self.session.pending_advance().is_some() && self.advance_deadline.is_none() {
                    debug!(delay = ?self.advance_delay, "Arming advance deadline");
                    self.advance_deadline = Some(Instant::now() + self.advance_delay);
                }

                match transition {
                    ScreenTransition::Stay => {}
                    ScreenTransition::EnterRooms => {
                        info!("Entering the rooms");
                        screen = ActiveScreen::Room(RoomScreen::new());
                    }
                    ScreenTransition::Quit => {
                        info!("Player quit");
                        return Ok(());
                    }
                }
            }
        }
    }
}
