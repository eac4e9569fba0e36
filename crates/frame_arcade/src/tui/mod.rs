//! Terminal UI for Frame Arcade.

mod controller;
mod screen;
mod screens;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use frame_rooms::{GameSession, RoomBook};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::Duration;
use tracing::{error, info};

use controller::ArcadeController;

/// Runs the arcade TUI until the player quits.
///
/// Sets up the terminal, plays one session over the given room table, and
/// restores the terminal on exit. The advance delay is the pause between a
/// correct answer and the automatic move to the next room.
pub async fn run_tui(book: RoomBook, advance_delay_ms: u64) -> Result<()> {
    // Log to a file so tracing output does not interfere with the TUI.
    let log_file = std::fs::File::create("frame_arcade_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Frame Arcade TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = GameSession::new(book);
    let mut controller =
        ArcadeController::new(session, Duration::from_millis(advance_delay_ms));
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Arcade loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
