//! Puzzle text format.
//!
//! ```text
//! 2 3 2
//! AA
//! A
//! B
//! BB
//! ```
//!
//! The header holds the board rows, board columns and the number of pieces.
//! Each following block of lines sharing the same first non-blank character
//! is one piece, drawn with that character. Blank lines are skipped and do
//! not end a block.
//!
//! Rows are trimmed on both sides by default, so every row of a block starts
//! at column 0. [`RowAlignment::Indented`] keeps leading whitespace as column
//! offsets instead.

use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, Result};
use crate::pieces::{Piece, Puzzle};

/// How leading whitespace in piece rows is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowAlignment {
    /// Every row is trimmed and starts at column 0.
    #[default]
    Trimmed,
    /// Leading whitespace counts as empty columns.
    Indented,
}

/// Reads and parses a puzzle file with trimmed rows.
///
/// # Errors
///
/// Returns [`PuzzleError::Read`] if the file cannot be read, or any error
/// from [`parse_puzzle`].
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    load_puzzle_with(path, RowAlignment::default())
}

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// See [`load_puzzle`].
pub fn load_puzzle_with(path: &Path, alignment: RowAlignment) -> Result<Puzzle> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle_with(&text, alignment)
}

/// Parses a full puzzle description with trimmed rows.
///
/// # Errors
///
/// Fails on a missing or malformed header and on piece blocks with no cells.
pub fn parse_puzzle(text: &str) -> Result<Puzzle> {
    parse_puzzle_with(text, RowAlignment::default())
}

/// Parses a full puzzle description.
///
/// # Errors
///
/// See [`parse_puzzle`].
pub fn parse_puzzle_with(text: &str, alignment: RowAlignment) -> Result<Puzzle> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(PuzzleError::MissingHeader)?;
    let (rows, cols, declared_pieces) = parse_header(header)?;

    let pieces = split_blocks(lines, alignment)
        .into_iter()
        .map(|(symbol, block)| Piece::new(symbol, &block))
        .collect::<Result<Vec<_>>>()?;

    if pieces.len() != declared_pieces {
        log::warn!(
            "header declares {declared_pieces} pieces but {} were found",
            pieces.len()
        );
    }
    log::debug!(
        "parsed {rows}x{cols} board with pieces [{}]",
        pieces.iter().map(Piece::symbol).collect::<String>()
    );

    Ok(Puzzle {
        rows,
        cols,
        declared_pieces,
        pieces,
    })
}

/// Parses `rows cols pieces`.
fn parse_header(line: &str) -> Result<(usize, usize, usize)> {
    let malformed = |reason: String| PuzzleError::MalformedHeader {
        line: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols, pieces] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 integers, found {} fields",
            fields.len()
        )));
    };

    let number = |field: &str| {
        field
            .parse::<usize>()
            .map_err(|err| malformed(format!("'{field}' is not a non-negative integer: {err}")))
    };

    let (rows, cols, pieces) = (number(*rows)?, number(*cols)?, number(*pieces)?);
    if rows.checked_mul(cols).is_none() {
        return Err(malformed(format!("board of {rows}x{cols} cells is too large")));
    }

    Ok((rows, cols, pieces))
}

/// Groups lines into `(symbol, rows)` blocks.
///
/// Trailing whitespace is always dropped; leading whitespace only with
/// [`RowAlignment::Trimmed`].
fn split_blocks<'a>(
    lines: impl Iterator<Item = &'a str>,
    alignment: RowAlignment,
) -> Vec<(char, Vec<&'a str>)> {
    let mut blocks: Vec<(char, Vec<&'a str>)> = Vec::new();

    let trim: fn(&str) -> &str = match alignment {
        RowAlignment::Trimmed => str::trim,
        RowAlignment::Indented => str::trim_end,
    };

    for line in lines.map(trim) {
        let Some(symbol) = line.trim_start().chars().next() else {
            continue;
        };

        match blocks.last_mut() {
            Some((current, rows)) if *current == symbol => rows.push(line),
            _ => blocks.push((symbol, vec![line])),
        }
    }

    blocks
}
