//! Screen shown while bootstrap requests are in flight, or after one fails.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// State for the in-between screen.
///
/// In the loading state there is nothing to do but wait or quit. Once a
/// bootstrap request fails the screen turns into an error display; the stored
/// game id stays untouched so a transient outage never destroys the session,
/// but starting over remains available.
#[derive(Debug)]
pub struct PendingScreen {
    message: String,
    failed: bool,
}

impl PendingScreen {
    /// Creates the screen in its loading state.
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            failed: false,
        }
    }

    /// Creates the screen in its failed state.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            failed: true,
        }
    }

    /// Whether the screen shows a failure.
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl Screen for PendingScreen {
    fn render(&self, frame: &mut Frame) {
        let style = if self.failed {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let help = if self.failed {
            "n: New game | q: Quit"
        } else {
            "q: Quit"
        };
        let body = format!("\n{}\n\n{help}", self.message);
        let paragraph = Paragraph::new(body)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("hexfill"));
        frame.render_widget(paragraph, frame.area());
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => ScreenTransition::Quit,
            KeyCode::Char('n') if self.failed => {
                info!("Starting over after a failed load");
                ScreenTransition::StartOver
            }
            _ => ScreenTransition::Stay,
        }
    }
}
