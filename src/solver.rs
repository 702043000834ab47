//! Backtracking tiling solver.
//!
//! Search works on a single mutable board: each placement is undone with
//! [`Board::lift`] before the next candidate is tried, and pieces are tracked
//! with a used flag per index instead of copying the remaining list. The
//! first complete tiling found is returned.

use std::time::{Duration, Instant};

use crate::grid::Board;
use crate::pieces::{Coord, Piece, Puzzle, Transformation};

/// Where a transformation is anchored relative to the targeted empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorRule {
    /// The target cell takes the transformation's local `(0, 0)`.
    ///
    /// The target may stay uncovered when `(0, 0)` is not one of the
    /// transformation's cells.
    #[default]
    Origin,
    /// The transformation is shifted so its first row-major cell lands on
    /// the target, which is then always covered.
    FirstCell,
}

impl AnchorRule {
    fn anchor(self, target: Coord, transformation: &Transformation) -> Coord {
        match self {
            Self::Origin => target,
            Self::FirstCell => match transformation.first_cell() {
                Some(first) => Coord::new(target.row - first.row, target.col - first.col),
                None => target,
            },
        }
    }
}

/// Search parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    pub anchor: AnchorRule,
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A complete tiling.
    Solved(Board),
    /// Every candidate was tried without success.
    NoSolution,
    /// Piece areas do not add up to the board area; no search was run.
    AreaMismatch { pieces_area: usize, board_area: usize },
}

/// Result of [`solve`] together with search diagnostics.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Number of transformations tested against a target cell.
    pub attempts: u64,
    /// Wall time spent searching.
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn solution(&self) -> Option<&Board> {
        match &self.outcome {
            Outcome::Solved(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }
}

/// Mutable search state threaded through the recursion.
struct Search<'a> {
    pieces: &'a [Piece],
    used: Vec<bool>,
    remaining: usize,
    board: Board,
    attempts: u64,
    anchor_rule: AnchorRule,
}

impl Search<'_> {
    fn backtrack(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }

        // pieces left but nowhere to put them
        let Some(target) = self.board.first_empty_cell() else {
            return false;
        };

        let pieces = self.pieces;
        for (piece_index, piece) in pieces.iter().enumerate() {
            if self.used[piece_index] {
                continue;
            }

            for transformation in piece.transformations() {
                self.attempts += 1;

                let anchor = self.anchor_rule.anchor(target, transformation);
                if !self.board.can_place(anchor, transformation) {
                    continue;
                }

                self.board.place(anchor, transformation, piece.symbol());
                self.used[piece_index] = true;
                self.remaining -= 1;
                log::trace!(
                    "placed '{}' at ({}, {}) for target ({}, {})",
                    piece.symbol(),
                    anchor.row,
                    anchor.col,
                    target.row,
                    target.col
                );

                if self.backtrack() {
                    return true;
                }

                self.remaining += 1;
                self.used[piece_index] = false;
                self.board.lift(anchor, transformation);
            }
        }

        false
    }
}

/// Searches for a tiling of `rows` x `cols` using every piece exactly once.
///
/// Pieces are tried in the order given, and each piece's transformations in
/// generation order, so the result and attempt count are deterministic.
pub fn solve_board(
    rows: usize,
    cols: usize,
    pieces: &[Piece],
    config: &SolverConfig,
) -> SearchReport {
    // an overflowing board can never match the pieces
    let board_area = rows.saturating_mul(cols);
    let pieces_area: usize = pieces.iter().map(Piece::area).sum();
    if pieces_area != board_area {
        log::debug!("area mismatch: pieces cover {pieces_area} cells, board has {board_area}");
        return SearchReport {
            outcome: Outcome::AreaMismatch {
                pieces_area,
                board_area,
            },
            attempts: 0,
            elapsed: Duration::ZERO,
        };
    }

    let start = Instant::now();
    let mut search = Search {
        pieces,
        used: vec![false; pieces.len()],
        remaining: pieces.len(),
        board: Board::new(rows, cols),
        attempts: 0,
        anchor_rule: config.anchor,
    };
    let solved = search.backtrack();
    let elapsed = start.elapsed();

    log::debug!(
        "search finished: solved={solved}, attempts={}, elapsed={elapsed:?}",
        search.attempts
    );

    SearchReport {
        outcome: if solved {
            Outcome::Solved(search.board)
        } else {
            Outcome::NoSolution
        },
        attempts: search.attempts,
        elapsed,
    }
}

/// Solves a parsed puzzle. See [`solve_board`].
pub fn solve(puzzle: &Puzzle, config: &SolverConfig) -> SearchReport {
    solve_board(puzzle.rows, puzzle.cols, &puzzle.pieces, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(symbol: char, rows: &[&str]) -> Piece {
        Piece::new(symbol, rows).unwrap()
    }

    fn assert_exact_cover(report: &SearchReport, pieces: &[Piece]) {
        let board = report.solution().expect("expected a solution");
        assert!(board.is_full());
        for p in pieces {
            assert_eq!(board.count(p.symbol()), p.area(), "cells of '{}'", p.symbol());
        }
    }

    #[test]
    fn test_single_square_fills_board() {
        let pieces = vec![piece('A', &["AA", "AA"])];
        let report = solve_board(2, 2, &pieces, &SolverConfig::default());

        assert_eq!(
            report.solution().map(ToString::to_string).as_deref(),
            Some("AA\nAA\n")
        );
        assert!(report.attempts >= 1);
    }

    #[test]
    fn test_two_dominoes_in_a_row() {
        let pieces = vec![piece('A', &["AA"]), piece('B', &["BB"])];
        let report = solve_board(1, 4, &pieces, &SolverConfig::default());

        assert_exact_cover(&report, &pieces);
        assert_eq!(report.solution().map(ToString::to_string).as_deref(), Some("AABB\n"));
    }

    #[test]
    fn test_area_mismatch_skips_search() {
        let pieces = vec![piece('A', &["AA", "A"])];
        let report = solve_board(2, 2, &pieces, &SolverConfig::default());

        assert_eq!(
            report.outcome,
            Outcome::AreaMismatch {
                pieces_area: 3,
                board_area: 4
            }
        );
        assert_eq!(report.attempts, 0);
        assert!(report.solution().is_none());
    }

    #[test]
    fn test_oversized_board_is_area_mismatch() {
        let report = solve_board(usize::MAX, 2, &[], &SolverConfig::default());

        assert!(matches!(report.outcome, Outcome::AreaMismatch { pieces_area: 0, .. }));
        assert_eq!(report.attempts, 0);
    }

    #[test]
    fn test_empty_puzzle_is_trivially_solved() {
        let report = solve_board(0, 0, &[], &SolverConfig::default());
        assert_eq!(report.solution(), Some(&Board::new(0, 0)));
        assert_eq!(report.attempts, 0);
    }

    #[test]
    fn test_exhaustion_is_no_solution() {
        // right area, but a 2x2 square never fits a 1x4 strip
        let pieces = vec![piece('A', &["AA", "AA"])];
        let report = solve_board(1, 4, &pieces, &SolverConfig::default());

        assert_eq!(report.outcome, Outcome::NoSolution);
        assert_eq!(report.attempts, 12);
    }

    #[test]
    fn test_backtracks_to_find_tiling() {
        let pieces = vec![piece('A', &["AA", "A"]), piece('B', &["B", "BB"])];
        let report = solve_board(2, 3, &pieces, &SolverConfig::default());

        assert_exact_cover(&report, &pieces);
        assert_eq!(
            report.solution().map(ToString::to_string).as_deref(),
            Some("ABB\nAAB\n")
        );
        // A tries 3 orientations, B exhausts 12 twice then succeeds on its 5th
        assert_eq!(report.attempts, 32);
    }

    #[test]
    fn test_search_is_deterministic() {
        let pieces = vec![
            piece('A', &["AAA", "A"]),
            piece('B', &["BB", "BB"]),
            piece('C', &["C", "CCC"]),
            piece('D', &["DD"]),
            piece('E', &["EE"]),
        ];
        let config = SolverConfig::default();

        let first = solve_board(4, 4, &pieces, &config);
        let second = solve_board(4, 4, &pieces, &config);

        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.attempts, second.attempts);
    }

    #[test]
    fn test_first_cell_anchor_covers_target() {
        let pieces = vec![piece('A', &["AA", "A"]), piece('B', &["B", "BB"])];
        let config = SolverConfig {
            anchor: AnchorRule::FirstCell,
        };
        let report = solve_board(2, 3, &pieces, &config);
        assert_exact_cover(&report, &pieces);
    }

    #[test]
    fn test_first_cell_anchor_shifts_left() {
        // first row-major cell is (0, 1)
        let corner = piece('B', &[" B", "BB"]);
        let t = &corner.transformations()[0];
        let anchor = AnchorRule::FirstCell.anchor(Coord::new(0, 1), t);

        assert_eq!(anchor, Coord::new(0, 0));
        assert_eq!(AnchorRule::Origin.anchor(Coord::new(0, 1), t), Coord::new(0, 1));
    }

    #[test]
    fn test_distinct_orientations_reduce_attempts() {
        let pieces = vec![piece('A', &["AA"]), piece('B', &["BB"])];
        let distinct: Vec<_> = pieces.iter().cloned().map(Piece::into_distinct).collect();
        let config = SolverConfig::default();

        let full = solve_board(1, 4, &pieces, &config);
        let reduced = solve_board(1, 4, &distinct, &config);

        assert_eq!(full.outcome, reduced.outcome);
        assert!(reduced.attempts <= full.attempts);
    }

    #[test]
    fn test_solve_uses_puzzle_dimensions() {
        let puzzle = Puzzle::new(1, 2, vec![piece('Z', &["ZZ"])]);
        let report = solve(&puzzle, &SolverConfig::default());
        assert!(report.is_solved());
    }
}
