use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use thiserror::Error;

use sudoku_sat::board::Board;
use sudoku_sat::encoder::encode_all;
use sudoku_sat::parser::parse_board;
use sudoku_sat::rules::{AntiKnightMoveRule, UniqueDiagonalRule};
use sudoku_sat::solver::{DpllSolver, Satisfiability, Solver};

/// Solve a Sudoku variant from its text representation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a puzzle file (see the text board format in the crate docs).
    puzzle: PathBuf,

    /// Both main diagonals must also contain each digit exactly once.
    #[arg(long)]
    diagonal: bool,

    /// No two cells a knight's move apart may share a digit.
    #[arg(long)]
    anti_knight: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not read puzzle file {path}: {source}")]
    ReadPuzzle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.puzzle).map_err(|source| CliError::ReadPuzzle {
        path: cli.puzzle.clone(),
        source,
    })?;

    let mut board = parse_board(&text);
    if cli.diagonal {
        board = board.with_rule(UniqueDiagonalRule);
    }
    if cli.anti_knight {
        board = board.with_rule(AntiKnightMoveRule);
    }

    println!("Puzzle:");
    println!("{board}");

    let formula = encode_all(&board.all_constraints());
    info!("encoded {} clauses", formula.clauses().len());

    match DpllSolver::new(formula).solve() {
        Satisfiability::Sat(assignment) => {
            let solved = sudoku_sat::board::parse_state(&assignment);
            println!("Solved:");
            println!("{solved}");
        }
        Satisfiability::Unsat => {
            println!("No solution exists for this puzzle.");
        }
    }

    Ok(())
}
