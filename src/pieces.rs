//! Piece definitions and coordinate types.
//!
//! A piece is a symbol plus every orientation of its shape. Shapes are read
//! from the rows of a text block; each orientation is stored normalized so
//! its bounding box starts at the origin.

use rustc_hash::FxHashSet;

use crate::error::{PuzzleError, Result};
use crate::geometry::all_transformations;

/// A cell offset, `(row, col)`. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// One normalized orientation of a piece.
///
/// Cells are kept in row-major order, so two orientations covering the same
/// cells compare equal. The minimum row and column are both zero, but the
/// origin itself is not necessarily one of the cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transformation {
    cells: Vec<Coord>,
}

impl Transformation {
    /// Wraps already-normalized cells.
    pub(crate) fn from_normalized(mut cells: Vec<Coord>) -> Self {
        cells.sort_unstable();
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.binary_search(&coord).is_ok()
    }

    /// First cell in row-major order. Its row is always zero.
    #[inline]
    pub fn first_cell(&self) -> Option<Coord> {
        self.cells.first().copied()
    }
}

/// A piece: its symbol and all of its orientations in generation order.
#[derive(Debug, Clone)]
pub struct Piece {
    symbol: char,
    transformations: Vec<Transformation>,
}

impl Piece {
    /// Builds a piece from the rows of its block.
    ///
    /// Every character equal to `symbol` becomes a cell; anything else in
    /// the rows is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyPiece`] if no character matches.
    pub fn new<S: AsRef<str>>(symbol: char, rows: &[S]) -> Result<Self> {
        let shape = parse_shape(symbol, rows);
        if shape.is_empty() {
            return Err(PuzzleError::EmptyPiece { symbol });
        }
        Ok(Self::from_shape(symbol, &shape))
    }

    /// Builds a piece from raw, possibly unnormalized, cell offsets.
    ///
    /// `shape` must not be empty.
    pub fn from_shape(symbol: char, shape: &[Coord]) -> Self {
        Self {
            symbol,
            transformations: all_transformations(shape),
        }
    }

    /// Drops orientations that cover the same cells as an earlier one.
    ///
    /// Keeps the first occurrence of each, so the search still visits
    /// orientations in generation order.
    pub fn into_distinct(mut self) -> Self {
        let mut seen: FxHashSet<Transformation> = FxHashSet::default();
        self.transformations.retain(|t| seen.insert(t.clone()));
        self
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    #[inline]
    pub fn transformations(&self) -> &[Transformation] {
        &self.transformations
    }

    /// Number of cells; the same for every orientation.
    pub fn area(&self) -> usize {
        self.transformations.first().map_or(0, Transformation::area)
    }
}

/// Scans block rows for cells matching `symbol`.
///
/// Coordinates are in the block's own row/column space and are not
/// normalized.
pub fn parse_shape<S: AsRef<str>>(symbol: char, rows: &[S]) -> Vec<Coord> {
    rows.iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.as_ref()
                .chars()
                .enumerate()
                .filter(move |&(_, ch)| ch == symbol)
                .map(move |(col, _)| Coord::new(row as i32, col as i32))
        })
        .collect()
}

/// A board size plus the pieces that must tile it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: usize,
    pub cols: usize,
    /// Piece count from the input header. Informational only.
    pub declared_pieces: usize,
    pub pieces: Vec<Piece>,
}

impl Puzzle {
    pub fn new(rows: usize, cols: usize, pieces: Vec<Piece>) -> Self {
        Self {
            rows,
            cols,
            declared_pieces: pieces.len(),
            pieces,
        }
    }

    /// Board cell count, saturating at `usize::MAX`.
    pub fn board_area(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn pieces_area(&self) -> usize {
        self.pieces.iter().map(Piece::area).sum()
    }

    /// Replaces every piece with its deduplicated form.
    pub fn into_distinct(mut self) -> Self {
        self.pieces = self.pieces.into_iter().map(Piece::into_distinct).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_ignores_other_characters() {
        let shape = parse_shape('A', &["A.A", " AA"]);
        assert_eq!(
            shape,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_empty_block_is_rejected() {
        let err = Piece::new('B', &["AAA"]).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyPiece { symbol: 'B' }));
    }

    #[test]
    fn test_piece_area_matches_cell_count() {
        let piece = Piece::new('T', &["TTT", " T"]).unwrap();
        assert_eq!(piece.area(), 4);
        assert_eq!(piece.transformations().len(), 12);
    }

    #[test]
    fn test_into_distinct_keeps_generation_order() {
        let square = Piece::new('O', &["OO", "OO"]).unwrap().into_distinct();
        assert_eq!(square.transformations().len(), 1);

        let line = Piece::new('I', &["III"]).unwrap();
        let first_two: Vec<_> = line.transformations()[..1]
            .iter()
            .chain(line.transformations()[3..4].iter())
            .cloned()
            .collect();
        let distinct = line.into_distinct();
        assert_eq!(distinct.transformations(), first_two.as_slice());
    }

    #[test]
    fn test_puzzle_areas() {
        let puzzle = Puzzle::new(
            2,
            3,
            vec![
                Piece::new('A', &["AA", "A"]).unwrap(),
                Piece::new('B', &["B", "BB"]).unwrap(),
            ],
        );
        assert_eq!(puzzle.board_area(), 6);
        assert_eq!(puzzle.pieces_area(), 6);
        assert_eq!(puzzle.declared_pieces, 2);
    }

    #[test]
    fn test_first_cell_is_row_major_minimum() {
        let t = Transformation::from_normalized(vec![
            Coord::new(1, 0),
            Coord::new(0, 2),
            Coord::new(0, 1),
        ]);
        assert_eq!(t.first_cell(), Some(Coord::new(0, 1)));
        assert!(t.contains(Coord::new(1, 0)));
        assert!(!t.contains(Coord::new(0, 0)));
    }
}
