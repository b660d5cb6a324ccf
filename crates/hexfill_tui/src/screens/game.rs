//! The live game screen: board, palette swatches, turn indicator and status.

use crossterm::event::{KeyCode, KeyEvent};
use hexfill::{Color, GameId, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::style::{HEADER_BG, indicator_rgb, terminal_color};
use crate::widgets::{BoardWidget, SWATCH_HEIGHT, SwatchBar};

/// State for the live game screen.
///
/// The session is replaced wholesale whenever the service answers; nothing
/// on this screen ever edits it in place. While a move is in flight every
/// further pick is ignored, so at most one request is outstanding.
#[derive(Debug)]
pub struct GameScreen {
    game_id: GameId,
    session: Session,
    cell_width: u16,
    cell_height: u16,
    move_in_flight: Option<Color>,
    status: String,
}

impl GameScreen {
    /// Creates the screen around a freshly fetched session.
    #[instrument(skip(session), fields(game_id = %game_id))]
    pub fn new(game_id: GameId, session: Session, cell_width: u16, cell_height: u16) -> Self {
        debug!("Initializing GameScreen");
        let mut screen = Self {
            game_id,
            session,
            cell_width,
            cell_height,
            move_in_flight: None,
            status: String::new(),
        };
        screen.refresh_status();
        screen
    }

    /// The session the screen is showing.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The color submitted and not yet answered, if any.
    pub fn move_in_flight(&self) -> Option<Color> {
        self.move_in_flight
    }

    /// Replaces the session with an accepted move's snapshot.
    pub fn apply_snapshot(&mut self, session: Session) {
        self.move_in_flight = None;
        self.session = session;
        if let Some(winner) = self.session.winner() {
            info!(winner = %winner.id, "Game decided");
        }
        self.refresh_status();
    }

    /// Records a rejected or failed move. The last good session stays up.
    pub fn move_failed(&mut self, reason: &str) {
        self.move_in_flight = None;
        self.status = reason.to_string();
    }

    fn refresh_status(&mut self) {
        self.status = match self.session.winner() {
            Some(winner) => format!("Player {} wins! Press n for a new game.", winner.id),
            None => format!("Player {} to move.", self.session.current_player().id),
        };
    }

    /// Decides what a palette key does. Runs entirely locally; only a
    /// usable pick turns into network traffic.
    fn choose(&mut self, color: Color) -> ScreenTransition {
        if self.session.is_decided() {
            debug!(color = %color, "Ignoring pick, game is decided");
            self.status = "Game over. Press n for a new game.".to_string();
            return ScreenTransition::Stay;
        }
        if let Some(pending) = self.move_in_flight {
            debug!(color = %color, pending = %pending, "Ignoring pick, move in flight");
            return ScreenTransition::Stay;
        }
        if !self.session.is_usable_color(color) {
            info!(color = %color, "Pick refused, color is held by a player");
            self.status = format!("Color {} is taken. Pick a free one.", color.key());
            return ScreenTransition::Stay;
        }
        self.move_in_flight = Some(color);
        self.status = format!("Submitting color {}...", color.key());
        ScreenTransition::SubmitMove { color }
    }

    fn header_line(&self) -> Line<'_> {
        let indicator = match self.session.winner() {
            Some(winner) => (winner, format!(" Player {} wins! ", winner.id)),
            None => {
                let current = self.session.current_player();
                (current, format!(" Player {}'s turn ", current.id))
            }
        };
        let (player, text) = indicator;
        let header_style = Style::default().bg(terminal_color(HEADER_BG));
        Line::from(vec![
            Span::styled(
                format!(" hexfill  [{}] ", self.game_id),
                header_style.fg(ratatui::style::Color::Black),
            ),
            Span::styled(
                text,
                header_style
                    .fg(terminal_color(indicator_rgb(player.color)))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

/// Centers a `width` x `height` box inside `parent`, clipping when larger.
fn center_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let x = parent.x + parent.width.saturating_sub(width) / 2;
    let y = parent.y + parent.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(parent.width), height.min(parent.height))
}

impl Screen for GameScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(SWATCH_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Paragraph::new(self.header_line())
            .style(Style::default().bg(terminal_color(HEADER_BG)));
        frame.render_widget(header, chunks[0]);

        let board_widget =
            BoardWidget::new(self.session.board(), self.cell_width, self.cell_height);
        let (need_w, need_h) = board_widget.required_size();
        if need_w <= chunks[1].width && need_h <= chunks[1].height {
            let board_area = center_rect(chunks[1], need_w, need_h);
            frame.render_widget(board_widget, board_area);
        } else {
            let notice = Paragraph::new(format!(
                "Terminal too small: the board needs {need_w}x{need_h} cells"
            ))
            .alignment(Alignment::Center)
            .style(Style::default().fg(ratatui::style::Color::Red));
            frame.render_widget(notice, chunks[1]);
        }

        let swatch_area = center_rect(chunks[2], SwatchBar::required_width(), SWATCH_HEIGHT);
        frame.render_widget(SwatchBar::new(&self.session), swatch_area);

        let status = Paragraph::new(self.status.clone())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[3]);

        let help = Paragraph::new("1-6: Pick a color | n: New game | q: Quit")
            .style(Style::default().fg(ratatui::style::Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                if let Some(color) = Color::from_key(c) {
                    return self.choose(color);
                }
                match c {
                    'n' => {
                        info!("Leaving the current game");
                        ScreenTransition::StartOver
                    }
                    'q' => ScreenTransition::Quit,
                    _ => ScreenTransition::Stay,
                }
            }
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use hexfill::{HexBoard, Player, PlayerId, Players};

    use super::*;

    fn session(winner: Option<PlayerId>) -> Session {
        Session::new(
            HexBoard::unclaimed(5, 5).unwrap(),
            Players {
                one: Player {
                    id: PlayerId::One,
                    color: Color::Red,
                },
                two: Player {
                    id: PlayerId::Two,
                    color: Color::Blue,
                },
            },
            PlayerId::One,
            winner,
        )
    }

    fn screen(winner: Option<PlayerId>) -> GameScreen {
        GameScreen::new(GameId::new("game-7"), session(winner), 8, 4)
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_player_colors_never_reach_the_network() {
        let mut screen = screen(None);
        // Key 1 is red, player one's own color; key 4 is blue, the opponent's.
        assert_eq!(screen.handle_key(key('1')), ScreenTransition::Stay);
        assert_eq!(screen.handle_key(key('4')), ScreenTransition::Stay);
        assert_eq!(screen.move_in_flight(), None);
    }

    #[test]
    fn test_usable_pick_submits_and_arms_the_guard() {
        let mut screen = screen(None);
        assert_eq!(
            screen.handle_key(key('3')),
            ScreenTransition::SubmitMove {
                color: Color::Green
            }
        );
        assert_eq!(screen.move_in_flight(), Some(Color::Green));

        // Second pick while the first is unanswered is dropped.
        assert_eq!(screen.handle_key(key('2')), ScreenTransition::Stay);
        assert_eq!(screen.move_in_flight(), Some(Color::Green));
    }

    #[test]
    fn test_accepted_snapshot_releases_the_guard() {
        let mut screen = screen(None);
        screen.handle_key(key('3'));

        let mut next = session(None);
        next = Session::new(
            next.board().clone(),
            Players {
                one: Player {
                    id: PlayerId::One,
                    color: Color::Green,
                },
                two: Player {
                    id: PlayerId::Two,
                    color: Color::Blue,
                },
            },
            PlayerId::Two,
            None,
        );
        screen.apply_snapshot(next);
        assert_eq!(screen.move_in_flight(), None);
        assert_eq!(screen.session().current_player().id, PlayerId::Two);
    }

    #[test]
    fn test_rejection_keeps_the_last_good_session() {
        let mut screen = screen(None);
        let before = screen.session().clone();
        screen.handle_key(key('3'));
        screen.move_failed("Move rejected by the service.");
        assert_eq!(screen.move_in_flight(), None);
        assert_eq!(*screen.session(), before);

        // The guard is released, so picking again works.
        assert_eq!(
            screen.handle_key(key('2')),
            ScreenTransition::SubmitMove {
                color: Color::Yellow
            }
        );
    }

    #[test]
    fn test_decided_game_ignores_picks() {
        let mut screen = screen(Some(PlayerId::Two));
        assert_eq!(screen.handle_key(key('3')), ScreenTransition::Stay);
        assert_eq!(screen.move_in_flight(), None);
    }

    #[test]
    fn test_navigation_keys() {
        let mut screen = screen(None);
        assert_eq!(screen.handle_key(key('n')), ScreenTransition::StartOver);
        assert_eq!(screen.handle_key(key('q')), ScreenTransition::Quit);
        assert_eq!(screen.handle_key(key('x')), ScreenTransition::Stay);
    }
}
