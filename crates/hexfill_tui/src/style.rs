//! Shared styling helpers for the terminal renderers.

use hexfill::{Color, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Shade delta of the softer (bottom) tile edge.
pub const EDGE_SOFT: i16 = -25;
/// Shade delta of the darker (right) tile edge.
pub const EDGE_DARK: i16 = -50;

/// Background of the header strip player indicators are drawn on.
///
/// The light strip is what makes the white-player substitution necessary in
/// the first place: indicators are drawn in the player's own color, and pure
/// white would vanish against it.
pub const HEADER_BG: Rgb = Rgb::new(0xdd, 0xdd, 0xdd);

/// Converts a palette RGB value into a terminal color.
pub fn terminal_color(rgb: Rgb) -> ratatui::style::Color {
    ratatui::style::Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// The color an indicator for `color` is drawn in.
///
/// White substitutes to black at this rendering boundary. Board cells are
/// not affected; they always render their true color.
pub fn indicator_rgb(color: Color) -> Rgb {
    if color == Color::White {
        Rgb::new(0, 0, 0)
    } else {
        color.rgb()
    }
}

/// Paints `tile` as a raised block of `rgb`, clipped to `bounds`.
///
/// The right and bottom edges carry darker shades of the face color, which
/// is what gives cells and swatches their relief.
pub fn paint_raised(buf: &mut Buffer, bounds: Rect, tile: Rect, rgb: Rgb) {
    let face = tile.intersection(bounds);
    if face.is_empty() {
        return;
    }
    buf.set_style(face, Style::default().bg(terminal_color(rgb)));
    if tile.width > 1 {
        let right = Rect::new(tile.right() - 1, tile.y, 1, tile.height).intersection(bounds);
        buf.set_style(
            right,
            Style::default().bg(terminal_color(rgb.shade(EDGE_DARK))),
        );
    }
    if tile.height > 1 {
        let bottom = Rect::new(tile.x, tile.bottom() - 1, tile.width, 1).intersection(bounds);
        buf.set_style(
            bottom,
            Style::default().bg(terminal_color(rgb.shade(EDGE_SOFT))),
        );
    }
}

/// Black or white, whichever stays legible on top of `background`.
pub fn contrast_fg(background: Rgb) -> ratatui::style::Color {
    // Perceived brightness, integer-weighted per ITU-R BT.601.
    let luma = 299 * u32::from(background.r)
        + 587 * u32::from(background.g)
        + 114 * u32::from(background.b);
    if luma > 128_000 {
        ratatui::style::Color::Black
    } else {
        ratatui::style::Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_indicator_substitutes_to_black() {
        assert_eq!(indicator_rgb(Color::White), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_other_indicators_keep_their_color() {
        assert_eq!(indicator_rgb(Color::Red), Color::Red.rgb());
        assert_eq!(indicator_rgb(Color::Blue), Color::Blue.rgb());
    }

    #[test]
    fn test_contrast_fg_flips_with_brightness() {
        assert_eq!(
            contrast_fg(Color::White.rgb()),
            ratatui::style::Color::Black
        );
        assert_eq!(
            contrast_fg(Color::Yellow.rgb()),
            ratatui::style::Color::Black
        );
        assert_eq!(contrast_fg(Color::Blue.rgb()), ratatui::style::Color::White);
        assert_eq!(contrast_fg(Rgb::new(0, 0, 0)), ratatui::style::Color::White);
    }
}
