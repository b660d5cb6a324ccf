//! Board widget projecting the staggered hex grid onto the terminal.

use hexfill::HexBoard;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::style::paint_raised;

/// Renders a [`HexBoard`] as interlocking raised tiles.
///
/// Odd rows shift right by half a cell and every row overlaps half the
/// height of the one above, which is what turns rectangular tiles into a
/// hex-looking grid. Rows paint top to bottom, so each row overdraws the
/// bottom edge of the previous one.
#[derive(Debug)]
pub struct BoardWidget<'a> {
    board: &'a HexBoard,
    cell_width: u16,
    cell_height: u16,
}

impl<'a> BoardWidget<'a> {
    /// Creates a widget for `board` with the configured cell geometry.
    pub fn new(board: &'a HexBoard, cell_width: u16, cell_height: u16) -> Self {
        Self {
            board,
            cell_width,
            cell_height,
        }
    }

    /// Terminal columns and rows the full board needs.
    ///
    /// The half-cell shift of odd rows widens the grid by half a cell, and
    /// the row overlap shrinks its height to one stride per extra row.
    pub fn required_size(&self) -> (u16, u16) {
        let width = self
            .cell_width
            .saturating_mul(self.board.width())
            .saturating_add(self.cell_width / 2);
        let stride = self.cell_height - self.cell_height / 2;
        let height = self
            .cell_height
            .saturating_add(stride.saturating_mul(self.board.height() - 1));
        (width, height)
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cell_w = u32::from(self.cell_width);
        let cell_h = u32::from(self.cell_height);
        for row in 0..self.board.height() {
            let h = u32::from(row);
            let y = u32::from(area.y) + h * cell_h - h * (cell_h / 2);
            if y >= u32::from(area.bottom()) {
                break;
            }
            for col in 0..self.board.row_len(row) {
                let w = u32::from(col);
                let x = u32::from(area.x) + w * cell_w + (h % 2) * (cell_w / 2);
                if x >= u32::from(area.right()) {
                    break;
                }
                let Some(cell) = self.board.cell_at(row, col) else {
                    continue;
                };
                let tile = Rect::new(x as u16, y as u16, self.cell_width, self.cell_height);
                paint_raised(buf, area, tile, cell.color().rgb());
            }
        }
    }
}
