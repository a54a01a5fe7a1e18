//! A constraint-satisfaction engine that solves 9x9 Sudoku variants
//! (classical, diagonal, thermometer, killer cage, little-killer, sum-pair)
//! by reducing each puzzle to a CNF formula and solving it with a DPLL
//! procedure extended with composite literals for arithmetic constraints.
//!
//! Data flow: a [`board::Board`] (cells + declared constraints) is walked by
//! [`encoder::encode_all`] into a single [`formula::ConjunctiveFormula`];
//! [`solver::Solver`] returns an [`assignment::Assignment`]; [`board::parse_state`]
//! reads the true variables back into a solved grid.

pub mod assignment;
pub mod board;
pub mod clause;
pub mod clue;
pub mod cnf;
pub mod constraint;
pub mod coordinate;
pub mod encoder;
pub mod formula;
pub mod literal;
pub mod naming;
pub mod parser;
pub mod rules;
pub mod solver;
pub mod sum_reducer;

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::coordinate::Coordinate;
    use crate::encoder::encode_all;
    use crate::rules::UniqueDiagonalRule;
    use crate::solver::{DpllSolver, Satisfiability, Solver};

    fn solve(board: &Board) -> Satisfiability {
        let formula = encode_all(&board.all_constraints());
        DpllSolver::new(formula).solve()
    }

    #[test]
    fn an_empty_board_is_satisfiable() {
        assert!(matches!(solve(&Board::empty()), Satisfiability::Sat(_)));
    }

    #[test]
    fn conflicting_givens_in_the_same_row_are_unsatisfiable() {
        let board = Board::empty()
            .with_given(Coordinate::new(1, 1), 1)
            .with_given(Coordinate::new(1, 2), 1);
        assert_eq!(solve(&board), Satisfiability::Unsat);
    }

    #[test]
    fn a_diagonal_board_with_no_givens_is_still_satisfiable() {
        let board = Board::empty().with_rule(UniqueDiagonalRule);
        assert!(matches!(solve(&board), Satisfiability::Sat(_)));
    }
}
