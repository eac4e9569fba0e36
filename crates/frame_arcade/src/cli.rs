//! Command-line interface for frame_arcade.

use clap::{Parser, Subcommand};

/// Frame Arcade - a six-room fragment hunt for the terminal
#[derive(Parser, Debug)]
#[command(name = "frame_arcade")]
#[command(about = "A six-room fragment hunt played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the fragment hunt
    Play {
        /// Path to a TOML room-content file (the built-in riddles if omitted)
        #[arg(long)]
        content: Option<std::path::PathBuf>,

        /// Pause between a correct answer and the room advance, in milliseconds
        #[arg(long, default_value = "2000")]
        advance_delay_ms: u64,
    },

    /// Validate a room-content file without starting the game
    Validate {
        /// Path to the content file to check
        content: std::path::PathBuf,
    },
}
