//! Rules: producers of constraint lists given a board's geometry. The
//! encoder is agnostic to which rule emitted a constraint.

use crate::board::Board;
use crate::constraint::Constraint;
use crate::coordinate::Coordinate;

/// A rule applied to a board's geometry, producing the constraints it
/// implies.
pub trait Rule {
    fn constraints(&self, board: &Board) -> Vec<Constraint>;
}

/// The default Sudoku rules: one cell per digit, uniqueness per row, column,
/// and region.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSudokuRules;

impl Rule for BasicSudokuRules {
    fn constraints(&self, board: &Board) -> Vec<Constraint> {
        let mut constraints = Vec::new();

        for coordinate in board.all_coordinates() {
            constraints.push(Constraint::cell_value(coordinate, board.all_values()));
        }
        for row in board.all_rows() {
            constraints.push(Constraint::unique_values(row));
        }
        for col in board.all_cols() {
            constraints.push(Constraint::unique_values(col));
        }
        for region in board.all_regions() {
            constraints.push(Constraint::unique_values(region));
        }

        constraints
    }
}

/// No two cells a knight's move apart may hold the same digit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntiKnightMoveRule;

impl Rule for AntiKnightMoveRule {
    fn constraints(&self, board: &Board) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        for coordinate in board.all_coordinates() {
            for knight in board.knight_moves(coordinate) {
                constraints.push(Constraint::unique_values(vec![coordinate, knight]));
            }
        }
        constraints
    }
}

/// Both main diagonals must hold each digit exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniqueDiagonalRule;

impl Rule for UniqueDiagonalRule {
    fn constraints(&self, board: &Board) -> Vec<Constraint> {
        let size = board.size();
        let main = board.diagonal(Coordinate::new(1, 1), Coordinate::new(size, size));
        let anti = board.diagonal(Coordinate::new(1, size), Coordinate::new(size, 1));
        vec![
            Constraint::unique_values(main),
            Constraint::unique_values(anti),
        ]
    }
}
