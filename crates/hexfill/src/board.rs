//! Hex board storage and addressing.
//!
//! The board is a pointy-top hex grid serialized as one flat row-major cell
//! list. Rows alternate between `width` cells (even rows) and `width - 1`
//! cells (odd rows), which gives the staggered layout without any sentinel
//! cells in the wire form.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::palette::Color;

/// A single board position holding the color that owns it.
///
/// An unclaimed cell carries the neutral color, [`Color::White`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    color: Color,
}

impl Cell {
    /// Creates a cell owned by `color`.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// The color currently occupying this cell.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// The raw wire form of a board, exactly as the service sends it.
///
/// Conversion into [`HexBoard`] is where the structural invariants are
/// checked; a `BoardSnapshot` itself makes no promises about its cell count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Cells in the longest (even) rows.
    pub width: u16,
    /// Number of rows.
    pub height: u16,
    /// Flat row-major cell list.
    pub cells: Vec<Cell>,
}

/// A validated hex board.
///
/// Deserialization goes through [`BoardSnapshot`], so every `HexBoard` in the
/// program satisfies `cells.len() == width * height - height / 2` and has
/// nonzero dimensions. Cells stay in wire order; [`HexBoard::index`] is the
/// only addressing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct HexBoard {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl HexBoard {
    /// Creates a board of unclaimed cells.
    pub fn unclaimed(width: u16, height: u16) -> Result<Self, SnapshotError> {
        let cells = vec![Cell::default(); Self::physical_cell_count(width, height)];
        Self::try_from(BoardSnapshot {
            width,
            height,
            cells,
        })
    }

    /// Number of cells a `width` x `height` board physically holds.
    ///
    /// Even rows hold `width` cells and odd rows `width - 1`, so the total is
    /// `width * height` minus one cell per odd row.
    pub fn physical_cell_count(width: u16, height: u16) -> usize {
        let (width, height) = (usize::from(width), usize::from(height));
        width * height - height / 2
    }

    /// Cells in the longest (even) rows.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// All cells in wire order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells physically present in `row`.
    pub const fn row_len(&self, row: u16) -> u16 {
        self.width - (row & 1)
    }

    /// Flat index of the cell at (`row`, `col`).
    ///
    /// Each odd row above `row` is one cell short, hence the `row / 2`
    /// correction. Only meaningful when [`HexBoard::cell_exists`] holds;
    /// callers probing the rectangle edge must check first.
    pub fn index(&self, row: u16, col: u16) -> usize {
        usize::from(row) * usize::from(self.width) - usize::from(row / 2) + usize::from(col)
    }

    /// Whether (`row`, `col`) falls inside the bounding rectangle.
    ///
    /// Deliberately coarser than [`HexBoard::cell_exists`]: the last position
    /// of an odd row passes here despite not existing. Use this to reject
    /// out-of-range input early, and `cell_exists` before any cell access.
    pub fn is_valid_cell(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.height) && col >= 0 && col < i32::from(self.width)
    }

    /// Whether a cell is physically present at (`row`, `col`).
    pub fn cell_exists(&self, row: i32, col: i32) -> bool {
        self.is_valid_cell(row, col) && col < i32::from(self.row_len(row as u16))
    }

    /// The cell at (`row`, `col`), if one exists there.
    pub fn cell_at(&self, row: u16, col: u16) -> Option<&Cell> {
        if self.cell_exists(i32::from(row), i32::from(col)) {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |row| {
            let start = self.index(row, 0);
            let len = usize::from(self.row_len(row));
            &self.cells[start..start + len]
        })
    }
}

impl TryFrom<BoardSnapshot> for HexBoard {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let BoardSnapshot {
            width,
            height,
            cells,
        } = snapshot;
        if width == 0 || height == 0 {
            return Err(SnapshotError::ZeroDimension { width, height });
        }
        let expected = Self::physical_cell_count(width, height);
        if cells.len() != expected {
            return Err(SnapshotError::CellCount {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl From<HexBoard> for BoardSnapshot {
    fn from(board: HexBoard) -> Self {
        Self {
            width: board.width,
            height: board.height,
            cells: board.cells,
        }
    }
}

/// A board snapshot failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SnapshotError {
    /// Width or height was zero.
    #[display("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Claimed width.
        width: u16,
        /// Claimed height.
        height: u16,
    },
    /// The flat cell list does not match the claimed dimensions.
    #[display("a {width}x{height} board holds {expected} cells, snapshot carries {actual}")]
    CellCount {
        /// Claimed width.
        width: u16,
        /// Claimed height.
        height: u16,
        /// Cell count the dimensions imply.
        expected: usize,
        /// Cell count actually present.
        actual: usize,
    },
}
