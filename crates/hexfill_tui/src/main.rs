//! Binary entry point for the hexfill terminal client.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use hexfill::{GameApi, GameId};
use hexfill_tui::{Cli, ClientConfig, Command, Controller, SessionStore, render_text};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            server_url,
            session_file,
            new,
        } => play(server_url, session_file, new).await,
        Command::Reset { session_file } => reset(session_file),
        Command::Inspect {
            server_url,
            session_file,
            game_id,
        } => inspect(server_url, session_file, game_id).await,
    }
}

/// Runs the interactive client.
async fn play(server_url: Option<String>, session_file: PathBuf, new: bool) -> Result<()> {
    // Log to a file so the alternate screen stays clean.
    let log_file = std::fs::File::create("hexfill_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting hexfill TUI");

    // Configuration problems are fatal and reported before any terminal
    // state changes hide them.
    let config = ClientConfig::resolve(server_url, session_file)?;
    if new {
        SessionStore::new(config.session_file().clone()).clear()?;
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(config);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Forgets the stored game id.
fn reset(session_file: PathBuf) -> Result<()> {
    init_stderr_logging();
    SessionStore::new(session_file).clear()?;
    println!("Stored game id cleared.");
    Ok(())
}

/// Fetches a game and prints it as text.
async fn inspect(
    server_url: Option<String>,
    session_file: PathBuf,
    game_id: Option<String>,
) -> Result<()> {
    init_stderr_logging();
    let config = ClientConfig::resolve(server_url, session_file)?;
    let id = match game_id {
        Some(raw) => GameId::new(raw),
        None => match SessionStore::new(config.session_file().clone()).load()? {
            Some(id) => id,
            None => anyhow::bail!("no stored game id; pass --game-id"),
        },
    };
    let api = GameApi::new(config.server_url().clone());
    let session = api.fetch_game(&id).await?;
    print!("{}", render_text(&session));
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
