//! Board Tiling Puzzle Solver
//!
//! Reads a board size and a list of polyomino pieces, searches for a tiling
//! that uses every piece once, prints it in color and optionally saves it.
//! Saved boards can be viewed later in a 3D window.

mod visualization;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tiler::parser::RowAlignment;
use tiler::render::{render_board, ColorMap};
use tiler::{parser, persistence, solver, AnchorRule, Outcome, PuzzleError, SolverConfig};

/// Tiles a rectangular board with polyomino pieces.
#[derive(Parser)]
#[command(name = "tiler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and optionally save the board.
    Solve(SolveArgs),
    /// Show a saved board in an interactive 3D viewer.
    Display {
        /// Board file written by `solve`.
        board: PathBuf,
    },
}

#[derive(Args, Default)]
struct SolveArgs {
    /// Puzzle file. Prompted for when omitted.
    input: Option<PathBuf>,

    /// Save the solved board here instead of asking.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where each orientation is anchored against the target cell.
    #[arg(short, long, value_enum, default_value_t = AnchorArg::Origin)]
    anchor: AnchorArg,

    /// Skip orientations that repeat an earlier one.
    #[arg(short, long)]
    distinct: bool,

    /// Treat leading spaces in piece rows as empty columns instead of trimming them.
    #[arg(long)]
    keep_indent: bool,

    /// Open the 3D viewer after solving.
    #[arg(long)]
    view: bool,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum AnchorArg {
    /// Target cell takes the orientation's local origin.
    #[default]
    Origin,
    /// Orientation's first cell lands on the target cell.
    FirstCell,
}

impl From<AnchorArg> for AnchorRule {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Origin => Self::Origin,
            AnchorArg::FirstCell => Self::FirstCell,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve(args)) => run_solver(args),
        Some(Command::Display { board }) => run_display(&board),
        // default: interactive solve
        None => run_solver(SolveArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parses the puzzle, searches, prints the outcome and handles saving.
fn run_solver(args: SolveArgs) -> Result<(), PuzzleError> {
    let input = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt("Input file: ")?),
    };

    let alignment = if args.keep_indent {
        RowAlignment::Indented
    } else {
        RowAlignment::Trimmed
    };
    let mut puzzle = parser::load_puzzle_with(&input, alignment)?;
    if args.distinct {
        puzzle = puzzle.into_distinct();
    }

    let config = SolverConfig {
        anchor: args.anchor.into(),
    };
    let report = solver::solve(&puzzle, &config);

    let board = match report.outcome {
        Outcome::AreaMismatch {
            pieces_area,
            board_area,
        } => {
            println!(
                "No solution: pieces cover {pieces_area} cells but the board has {board_area}."
            );
            return Ok(());
        }
        Outcome::NoSolution => {
            print_diagnostics(&report);
            println!("The puzzle has no solution.");
            return Ok(());
        }
        Outcome::Solved(ref board) => board,
    };

    print_diagnostics(&report);
    let colors = ColorMap::from_symbols(puzzle.pieces.iter().map(|piece| piece.symbol()));
    print!("{}", render_board(board, &colors));

    let destination = match args.output {
        Some(path) => Some(path),
        None => ask_destination()?,
    };
    if let Some(path) = destination {
        persistence::save(board, &path)?;
        println!("Wrote {}", path.display());
    }

    if args.view {
        println!("Controls: Up/Down explode, R reset");
        visualization::display(board, &colors);
    }

    Ok(())
}

fn print_diagnostics(report: &solver::SearchReport) {
    println!("Search time: {} ms", report.elapsed.as_millis());
    println!("Placements tried: {}", report.attempts);
}

/// Asks whether to save and, if so, where.
fn ask_destination() -> Result<Option<PathBuf>, PuzzleError> {
    let answer = prompt("Save the solution? (y/n) ")?.to_lowercase();
    if matches!(answer.as_str(), "y" | "yes") {
        Ok(Some(PathBuf::from(prompt("Output file: ")?)))
    } else {
        Ok(None)
    }
}

/// Prints `message` and reads one trimmed line from stdin.
fn prompt(message: &str) -> Result<String, PuzzleError> {
    print!("{message}");
    io::stdout()
        .flush()
        .map_err(|source| PuzzleError::Prompt { source })?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|source| PuzzleError::Prompt { source })?;
    Ok(line.trim().to_string())
}

/// Loads a saved board and displays it.
fn run_display(path: &Path) -> Result<(), PuzzleError> {
    let board = persistence::load(path)?;
    println!("Loaded {}x{} board", board.rows(), board.cols());
    println!("Controls: Up/Down explode, R reset");
    visualization::display(&board, &ColorMap::from_board(&board));
    Ok(())
}
