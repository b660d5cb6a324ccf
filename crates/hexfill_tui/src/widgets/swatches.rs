//! Palette swatch bar for picking the next move.

use hexfill::{Color, Session};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::style::{contrast_fg, paint_raised, terminal_color};

/// Width of one swatch in terminal columns.
pub const SWATCH_WIDTH: u16 = 7;
/// Height of the swatch bar in terminal rows.
pub const SWATCH_HEIGHT: u16 = 3;

const SWATCH_GAP: u16 = 1;

// Darkening applied to swatches that cannot be picked right now.
const UNUSABLE_SHADE: i16 = -150;

/// Renders the palette as one swatch per color, labeled with its key.
///
/// Swatches that cannot be submitted (either player's color, or everything
/// once the game is decided) render darkened and dimmed.
#[derive(Debug)]
pub struct SwatchBar<'a> {
    session: &'a Session,
}

impl<'a> SwatchBar<'a> {
    /// Creates the bar for the given session.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Terminal columns the full bar needs.
    pub fn required_width() -> u16 {
        let count = Color::iter().count() as u16;
        count * SWATCH_WIDTH + (count - 1) * SWATCH_GAP
    }
}

impl Widget for SwatchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, color) in Color::iter().enumerate() {
            let x = area.x + (i as u16) * (SWATCH_WIDTH + SWATCH_GAP);
            if x >= area.right() {
                break;
            }
            let usable = self.session.is_usable_color(color);
            let rgb = if usable {
                color.rgb()
            } else {
                color.rgb().shade(UNUSABLE_SHADE)
            };
            let tile = Rect::new(x, area.y, SWATCH_WIDTH, area.height.min(SWATCH_HEIGHT));
            paint_raised(buf, area, tile, rgb);

            let mut style = Style::default()
                .fg(contrast_fg(rgb))
                .bg(terminal_color(rgb));
            if !usable {
                style = style.add_modifier(Modifier::DIM);
            }
            let key_x = x + SWATCH_WIDTH / 2;
            let key_y = area.y + tile.height / 2;
            if key_x < area.right() && key_y < area.bottom() {
                buf.set_string(key_x, key_y, color.key().to_string(), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hexfill::{HexBoard, Player, PlayerId, Players, Session};
    use ratatui::layout::Position;
    use ratatui::style::Color as TermColor;

    use super::*;

    fn session(winner: Option<PlayerId>) -> Session {
        Session::new(
            HexBoard::unclaimed(3, 3).unwrap(),
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

    fn render(session: &Session) -> Buffer {
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SwatchBar::new(session).render(area, &mut buf);
        buf
    }

    fn bg_at(buf: &Buffer, x: u16, y: u16) -> Option<TermColor> {
        buf.cell(Position::new(x, y)).and_then(|cell| cell.style().bg)
    }

    #[test]
    fn test_player_colors_render_darkened() {
        let buf = render(&session(None));
        // Red (swatch 1) is player one's color: darkened by 150.
        assert_eq!(bg_at(&buf, 0, 0), Some(TermColor::Rgb(105, 0, 0)));
        // Green (swatch 3) is free: full color. Swatch stride is 8.
        assert_eq!(bg_at(&buf, 16, 0), Some(TermColor::Rgb(0, 0xff, 0)));
    }

    #[test]
    fn test_everything_darkens_once_decided() {
        let buf = render(&session(Some(PlayerId::Two)));
        assert_eq!(bg_at(&buf, 16, 0), Some(TermColor::Rgb(0, 105, 0)));
    }

    #[test]
    fn test_swatches_carry_their_key_labels() {
        let buf = render(&session(None));
        let key = buf.cell(Position::new(3, 1)).unwrap().symbol();
        assert_eq!(key, "1");
        let key = buf.cell(Position::new(19, 1)).unwrap().symbol();
        assert_eq!(key, "3");
    }
}
