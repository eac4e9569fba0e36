//! Frame Arcade - terminal fragment hunt.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use frame_arcade::{RoomFile, run_tui};
use frame_rooms::RoomBook;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            content,
            advance_delay_ms,
        } => {
            let book = match content {
                Some(path) => RoomFile::load(path)?,
                None => RoomBook::builtin(),
            };
            run_tui(book, advance_delay_ms).await
        }
        Command::Validate { content } => validate_content(content),
    }
}

/// Checks a content file and reports the result.
fn validate_content(path: std::path::PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let book = RoomFile::load(&path)?;

    info!(path = %path.display(), "Content file is valid");
    println!(
        "{}: valid room table, {} fragments to collect",
        path.display(),
        book.fragment_goal()
    );
    Ok(())
}
