//! Error types for puzzle input, prompts and saved boards.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside the search itself.
///
/// An unsolvable puzzle is not an error; see [`crate::solver::Outcome`].
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The input has no header line at all.
    #[error("input is empty: expected a header line with rows, columns and piece count")]
    MissingHeader,

    /// The header line is not three non-negative integers.
    #[error("malformed header {line:?}: {reason}")]
    MalformedHeader { line: String, reason: String },

    /// A piece block contains no cell matching its symbol.
    #[error("piece '{symbol}' has no cells")]
    EmptyPiece { symbol: char },

    /// Reading an input or saved board failed.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a solved board failed.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt could not read from stdin.
    #[error("failed to read answer from stdin: {source}")]
    Prompt {
        #[source]
        source: io::Error,
    },

    /// A saved board file does not describe a rectangular grid.
    #[error("saved board is malformed: {reason}")]
    InvalidBoard { reason: String },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;
