//! Command-line interface for the hexfill client.

use clap::{Parser, Subcommand};

/// Hexfill - terminal client for the hex territory game
#[derive(Parser, Debug)]
#[command(name = "hexfill_tui")]
#[command(about = "Terminal client for the hexfill territory game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, resuming the stored game if one exists
    Play {
        /// Game service URL. Falls back to the HEXFILL_SERVER_URL environment variable.
        #[arg(long)]
        server_url: Option<String>,

        /// Path of the file the current game id is stored in
        #[arg(long, default_value = "hexfill_session.toml")]
        session_file: std::path::PathBuf,

        /// Discard the stored game id and start from board-size selection
        #[arg(long)]
        new: bool,
    },

    /// Forget the stored game id
    Reset {
        /// Path of the file the current game id is stored in
        #[arg(long, default_value = "hexfill_session.toml")]
        session_file: std::path::PathBuf,
    },

    /// Fetch a game and print it as plain text
    Inspect {
        /// Game service URL. Falls back to the HEXFILL_SERVER_URL environment variable.
        #[arg(long)]
        server_url: Option<String>,

        /// Path of the file the current game id is stored in
        #[arg(long, default_value = "hexfill_session.toml")]
        session_file: std::path::PathBuf,

        /// Inspect this game id instead of the stored one
        #[arg(long)]
        game_id: Option<String>,
    },
}
