//! Room screen: the active riddle, answer entry, and the fragment tray.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use frame_rooms::{GameSession, RoomId, SubmitOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

/// Feedback shown under the answer box.
#[derive(Debug, Clone)]
enum Feedback {
    /// The room was solved; carries the explanation text.
    Solved(String),
    /// The answer was wrong.
    TryAgain,
    /// Navigation to the final room was refused; carries the gate message.
    Gated(String),
}

/// Accent color for a room, echoing its mood.
fn accent(room: RoomId) -> Color {
    match room {
        RoomId::One => Color::Magenta,
        RoomId::Two => Color::Blue,
        RoomId::Three => Color::Green,
        RoomId::Four => Color::Red,
        RoomId::Five => Color::Yellow,
        RoomId::Six => Color::White,
    }
}

/// State for the room screen.
///
/// The answer buffer and feedback text are presentation state; the session
/// itself stores neither.
#[derive(Debug, Default, Getters)]
pub struct RoomScreen {
    answer_input: String,
    #[getter(skip)]
    feedback: Option<Feedback>,
}

impl RoomScreen {
    /// Creates a new room screen with an empty answer buffer.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing RoomScreen");
        Self::default()
    }

    /// Called by the controller when the pacing delay lands a room advance.
    #[instrument(skip(self), fields(room = %room))]
    pub fn on_advanced(&mut self, room: RoomId) {
        self.feedback = None;
    }

    /// Attempts to move to the neighboring room in the given direction.
    #[instrument(skip(self, session))]
    fn navigate_step(&mut self, session: &mut GameSession, forward: bool) {
        let current = *session.current_room();
        let target = if forward {
            current.next()
        } else {
            current.previous()
        };

        let Some(target) = target else {
            return;
        };

        match session.navigate(target) {
            Ok(()) => {
                debug!(room = %target, "Moved to room");
                self.feedback = None;
                self.answer_input.clear();
            }
            Err(gate) => {
                info!(%gate, "Final room refused entry");
                self.feedback = Some(Feedback::Gated(gate.to_string()));
            }
        }
    }

    /// Submits the answer buffer for the current room.
    #[instrument(skip(self, session))]
    fn submit(&mut self, session: &mut GameSession) {
        let room = *session.current_room();
        match session.submit_answer(room, &self.answer_input) {
            SubmitOutcome::Correct { explanation, .. } => {
                self.feedback = Some(Feedback::Solved(explanation));
                self.answer_input.clear();
            }
            SubmitOutcome::Incorrect => {
                self.feedback = Some(Feedback::TryAgain);
            }
        }
    }

    /// One marker per room: its number when solved, a dot otherwise.
    fn progress_line(session: &GameSession) -> String {
        RoomId::iter()
            .map(|room| {
                if session.is_completed(room) {
                    room.number().to_string()
                } else {
                    "·".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Screen for RoomScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let room = *session.current_room();
        let spec = session.rooms().room(room);
        let color = accent(room);

        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(format!("{} of 6: {}", room, spec.title()))
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let body = format!("{}\n\n{}", spec.description(), spec.puzzle());
        let puzzle = Paragraph::new(body)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Riddle"));
        frame.render_widget(puzzle, chunks[1]);

        let player = session.username().as_deref().unwrap_or("?");
        let tray_text = format!(
            "Player: {}   Fragments: [{}]   Solved: {}",
            player,
            session
                .fragments()
                .iter()
                .map(|f| f.token().to_string())
                .collect::<Vec<_>>()
                .join(" "),
            Self::progress_line(session),
        );
        let tray = Paragraph::new(tray_text)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(tray, chunks[2]);

        if session.victory() {
            let banner = Paragraph::new("The frame is complete.")
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(banner, chunks[3]);
        } else {
            let input = Paragraph::new(self.answer_input.as_str())
                .style(Style::default().fg(Color::White))
                .block(Block::default().borders(Borders::ALL).title("Your answer"));
            frame.render_widget(input, chunks[3]);
        }

        let (feedback_text, feedback_color) = match &self.feedback {
            Some(Feedback::Solved(explanation)) => (format!("Correct! {}", explanation), Color::Green),
            Some(Feedback::TryAgain) => ("Not quite. Try again.".to_string(), Color::Red),
            Some(Feedback::Gated(message)) => (message.clone(), Color::Yellow),
            None => (String::new(), Color::DarkGray),
        };
        let feedback = Paragraph::new(feedback_text)
            .style(Style::default().fg(feedback_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(feedback, chunks[4]);

        let help = Paragraph::new("Type answer | Enter: Submit | ←→: Change room | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.answer_input.push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.answer_input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                self.submit(session);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.navigate_step(session, false);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.navigate_step(session, true);
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
