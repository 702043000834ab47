//! File I/O for saving and loading solved boards.
//!
//! Text format: one line per board row, one character per cell, no
//! separators. Empty cells (only present in unsolved boards) are written as
//! `.`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{PuzzleError, Result};
use crate::grid::{Board, EMPTY_CELL};

/// Writes `board` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`PuzzleError::Write`] if the file cannot be created or written.
pub fn save(board: &Board, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| PuzzleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = BufWriter::new(File::create(path).map_err(write_error)?);
    write!(file, "{board}").map_err(write_error)?;
    file.flush().map_err(write_error)?;
    Ok(())
}

/// Reads a board previously written by [`save`].
///
/// # Errors
///
/// Returns [`PuzzleError::Read`] if the file cannot be read and
/// [`PuzzleError::InvalidBoard`] if its rows are not all the same width.
pub fn load(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_board(&text)
}

/// Parses the text form of a board. Trailing blank lines are ignored.
pub fn parse_board(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
    let cols = rows.first().map_or(0, |row| row.chars().count());

    let mut cells = Vec::with_capacity(rows.len() * cols);
    for (index, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != cols {
            return Err(PuzzleError::InvalidBoard {
                reason: format!("row {} has {width} cells, expected {cols}", index + 1),
            });
        }
        cells.extend(
            row.chars()
                .map(|ch| if ch == EMPTY_CELL { None } else { Some(ch) }),
        );
    }

    Board::from_cells(rows.len(), cols, cells).ok_or_else(|| PuzzleError::InvalidBoard {
        reason: "cell count does not match dimensions".to_string(),
    })
}
