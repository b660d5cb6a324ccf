//! Board-size selection screen, shown when no game is stored.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};

/// A selectable board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    /// Menu label.
    pub label: &'static str,
    /// Cells in the longest rows.
    pub width: u16,
    /// Number of rows.
    pub height: u16,
}

/// The sizes offered on the new-game screen.
pub const SIZE_PRESETS: [SizePreset; 3] = [
    SizePreset {
        label: "Small",
        width: 5,
        height: 5,
    },
    SizePreset {
        label: "Medium",
        width: 9,
        height: 9,
    },
    SizePreset {
        label: "Large",
        width: 13,
        height: 13,
    },
];

/// State for the board-size selection screen.
#[derive(Debug, Default)]
pub struct NewGameScreen {
    selected: usize,
    status: Option<String>,
}

impl NewGameScreen {
    /// Creates the screen with the first preset selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing NewGameScreen");
        Self::default()
    }

    /// Shows `message` in the status area, used for failed create requests.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// The currently highlighted preset.
    pub fn selected_preset(&self) -> SizePreset {
        SIZE_PRESETS[self.selected.min(SIZE_PRESETS.len() - 1)]
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SIZE_PRESETS.len();
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + SIZE_PRESETS.len() - 1) % SIZE_PRESETS.len();
    }
}

impl Screen for NewGameScreen {
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("hexfill - new game")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = SIZE_PRESETS
            .iter()
            .map(|preset| {
                ListItem::new(format!(
                    "{:<8} {} x {}",
                    preset.label, preset.width, preset.height
                ))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Board size"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let status = Paragraph::new(self.status.clone().unwrap_or_default())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("↑↓: Select | Enter: Create | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let preset = self.selected_preset();
                info!(
                    label = preset.label,
                    width = preset.width,
                    height = preset.height,
                    "Board size chosen"
                );
                ScreenTransition::CreateGame {
                    width: preset.width,
                    height: preset.height,
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut screen = NewGameScreen::new();
        assert_eq!(screen.selected_preset().label, "Small");
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected_preset().label, "Large");
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.selected_preset().label, "Medium");
    }

    #[test]
    fn test_enter_requests_the_selected_size() {
        let mut screen = NewGameScreen::new();
        screen.handle_key(key(KeyCode::Down));
        let transition = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            transition,
            ScreenTransition::CreateGame {
                width: 9,
                height: 9
            }
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut screen = NewGameScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q'))),
            ScreenTransition::Quit
        );
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::Quit);
    }
}
