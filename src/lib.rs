//! Board Tiling Puzzle Solver Library
//!
//! Finds one way to cover a rectangular board with a set of polyomino
//! pieces, each used once in any rotation or reflection.

pub mod error;
pub mod geometry;
pub mod grid;
pub mod parser;
pub mod persistence;
pub mod pieces;
pub mod render;
pub mod solver;

pub use error::{PuzzleError, Result};
pub use grid::Board;
pub use pieces::{Coord, Piece, Puzzle, Transformation};
pub use solver::{solve, AnchorRule, Outcome, SearchReport, SolverConfig};
