//! Board representation and placement operations.
//!
//! The board is a flat row-major array where each cell holds a piece symbol
//! or `None` for empty. Placements are anchored at a signed board position:
//! a transformation's local `(0, 0)` lands on the anchor, and every cell
//! offset is added to it.

use std::fmt;

use crate::pieces::{Coord, Transformation};

/// Character used for empty cells in the text form of a board.
pub const EMPTY_CELL: char = '.';

/// An N x M grid of optional piece symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Builds a board from already-filled cells in row-major order.
    ///
    /// Returns `None` if the cell count does not match the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Option<char>>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts a signed position to a cell index, if it is on the board.
    #[inline]
    fn index_of(&self, coord: Coord) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Symbol at `(row, col)`, or `None` if empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Iterates rows of cells, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks(0) panics; an empty board has no rows anyway
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Finds the first empty cell in row-major order.
    ///
    /// Returns `None` if every cell is filled.
    pub fn first_empty_cell(&self) -> Option<Coord> {
        self.cells.iter().position(Option::is_none).map(|index| {
            Coord::new((index / self.cols) as i32, (index % self.cols) as i32)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: char) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(symbol)).count()
    }

    /// Checks that every cell of `transformation` anchored at `anchor` is on
    /// the board and empty.
    ///
    /// The anchor itself is not required to be covered.
    pub fn can_place(&self, anchor: Coord, transformation: &Transformation) -> bool {
        transformation.cells().iter().all(|&offset| {
            self.index_of(offset_from(anchor, offset))
                .is_some_and(|index| self.cells[index].is_none())
        })
    }

    /// Writes `symbol` into every cell of `transformation` anchored at `anchor`.
    ///
    /// Must be preceded by a successful [`Board::can_place`].
    pub fn place(&mut self, anchor: Coord, transformation: &Transformation, symbol: char) {
        debug_assert!(self.can_place(anchor, transformation));
        self.fill(anchor, transformation, Some(symbol));
    }

    /// Clears exactly the cells written by the matching [`Board::place`].
    pub fn lift(&mut self, anchor: Coord, transformation: &Transformation) {
        self.fill(anchor, transformation, None);
    }

    fn fill(&mut self, anchor: Coord, transformation: &Transformation, value: Option<char>) {
        for &offset in transformation.cells() {
            if let Some(index) = self.index_of(offset_from(anchor, offset)) {
                self.cells[index] = value;
            }
        }
    }
}

#[inline]
const fn offset_from(anchor: Coord, offset: Coord) -> Coord {
    Coord::new(anchor.row + offset.row, anchor.col + offset.col)
}

/// Plain text: one line per row, no separators, `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
