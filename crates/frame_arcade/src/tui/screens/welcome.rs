//! Welcome screen: username entry before the hunt begins.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use frame_rooms::GameSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

/// State for the welcome screen.
///
/// Holds the username input buffer. An empty or whitespace-only name is
/// refused silently: the form simply stays unsubmitted.
#[derive(Debug, Default, Getters)]
pub struct WelcomeScreen {
    name_input: String,
}

impl WelcomeScreen {
    /// Creates a new welcome screen with an empty name buffer.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing WelcomeScreen");
        Self::default()
    }
}

impl Screen for WelcomeScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let presents = Paragraph::new("TOUR ARCADE PRESENTS")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(presents, chunks[0]);

        let title = Paragraph::new("THE MISSING FRAME")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[1]);

        let blurb = Paragraph::new(
            "Six rooms. Six riddles. Collect the fragments and reveal the final word.",
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
        frame.render_widget(blurb, chunks[2]);

        let input = Paragraph::new(self.name_input.as_str())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Enter your name"),
            );
        frame.render_widget(input, chunks[3]);

        let help = Paragraph::new("Type name | Enter: Begin | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.name_input.push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.name_input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match session.start(&self.name_input) {
                Ok(()) => {
                    info!("Player entered the rooms");
                    ScreenTransition::EnterRooms
                }
                // Blank names are refused without surfacing an error.
                Err(_) => ScreenTransition::Stay,
            },
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
