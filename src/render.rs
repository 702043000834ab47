//! Colored terminal output for solved boards.

use rustc_hash::FxHashMap;

use crate::grid::{Board, EMPTY_CELL};

/// Number of distinct display colors; symbols beyond this reuse colors.
pub const PALETTE_SIZE: usize = 7;

/// ANSI foreground colors: red, green, yellow, blue, magenta, cyan, white.
const ANSI_PALETTE: [&str; PALETTE_SIZE] = [
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
];

const ANSI_RESET: &str = "\x1b[0m";

/// Assigns each symbol a palette slot by first appearance.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    slots: FxHashMap<char, usize>,
}

impl ColorMap {
    /// Builds the map from symbols in display priority order. Repeated
    /// symbols keep their first slot.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut slots = FxHashMap::default();
        for symbol in symbols {
            let next = slots.len();
            slots.entry(symbol).or_insert(next);
        }
        Self { slots }
    }

    /// Builds the map from the board itself, in row-major order.
    pub fn from_board(board: &Board) -> Self {
        Self::from_symbols(board.iter_rows().flatten().flatten().copied())
    }

    /// Palette slot for `symbol`, cycling once the palette runs out.
    pub fn slot(&self, symbol: char) -> Option<usize> {
        self.slots.get(&symbol).map(|index| index % PALETTE_SIZE)
    }
}

/// Renders the board with one colored, space-separated character per cell.
///
/// Symbols missing from `colors` and empty cells are printed uncolored.
pub fn render_board(board: &Board, colors: &ColorMap) -> String {
    let mut output = String::new();

    for row in board.iter_rows() {
        for cell in row {
            match cell.and_then(|symbol| colors.slot(symbol).map(|slot| (symbol, slot))) {
                Some((symbol, slot)) => {
                    output.push_str(ANSI_PALETTE[slot]);
                    output.push(symbol);
                    output.push_str(ANSI_RESET);
                }
                None => output.push(cell.unwrap_or(EMPTY_CELL)),
            }
            output.push(' ');
        }
        output.push('\n');
    }

    output
}
