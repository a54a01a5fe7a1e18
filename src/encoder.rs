//! CNF encoder: maps each constraint variant to a conjunctive-formula
//! fragment. The final formula is the AND of all fragments.

use crate::clause::DisjunctiveClause;
use crate::cnf::exactly_one_true;
use crate::constraint::Constraint;
use crate::coordinate::Coordinate;
use crate::formula::ConjunctiveFormula;
use crate::literal::Literal;
use crate::naming::variable_name;
use crate::sum_reducer::make_sum_reducer;

fn lit(coordinate: Coordinate, digit: u8) -> Literal {
    Literal::positive(variable_name(coordinate, digit))
}

/// Encodes a single constraint into the formula fragment it implies.
pub fn encode(constraint: &Constraint) -> ConjunctiveFormula {
    match constraint {
        Constraint::CellValue { coordinate, allowed } => {
            let literals: Vec<Literal> = allowed.iter().map(|&d| lit(*coordinate, d)).collect();
            exactly_one_true(&literals)
        }

        Constraint::UniqueValues { coordinates } => encode_unique_values(coordinates),

        Constraint::ContainsValues { coordinates, digits } => {
            let clauses = digits.iter().map(|&d| {
                let literals: Vec<Literal> = coordinates.iter().map(|&c| lit(c, d)).collect();
                DisjunctiveClause::new(literals)
            });
            ConjunctiveFormula::new(clauses.collect())
        }

        Constraint::IncreasingValues { coordinates } => encode_increasing_values(coordinates),

        Constraint::ConstantSum { coordinates, target } => encode_constant_sum(coordinates, *target),
    }
}

/// Encodes a full constraint list as the conjunction of their fragments.
pub fn encode_all(constraints: &[Constraint]) -> ConjunctiveFormula {
    let mut formula = ConjunctiveFormula::empty();
    for constraint in constraints {
        formula = formula.and(encode(constraint));
    }
    formula
}

fn encode_unique_values(coordinates: &[Coordinate]) -> ConjunctiveFormula {
    let mut clauses = Vec::new();
    for (i, &a) in coordinates.iter().enumerate() {
        for &b in &coordinates[i + 1..] {
            for digit in 1..=9u8 {
                clauses.push(DisjunctiveClause::new(vec![
                    lit(a, digit).negate(),
                    lit(b, digit).negate(),
                ]));
            }
        }
    }
    ConjunctiveFormula::new(clauses)
}

/// Pigeonhole restriction plus pairwise non-increasing exclusion.
fn encode_increasing_values(coordinates: &[Coordinate]) -> ConjunctiveFormula {
    let n = coordinates.len();
    let dof = 9 - n as u8;

    let mut formula = ConjunctiveFormula::empty();
    for (i, &coordinate) in coordinates.iter().enumerate() {
        let low = i as u8 + 1;
        let allowed: Vec<u8> = (low..=low + dof).collect();
        formula = formula.and(encode(&Constraint::cell_value(coordinate, allowed)));
    }

    let mut clauses = Vec::new();
    for (i, &a) in coordinates.iter().enumerate() {
        for &b in &coordinates[i + 1..] {
            for va in 1..=9u8 {
                for vb in 1..=9u8 {
                    if vb < va {
                        clauses.push(DisjunctiveClause::new(vec![
                            lit(a, va).negate(),
                            lit(b, vb).negate(),
                        ]));
                    }
                }
            }
        }
    }
    formula.and(ConjunctiveFormula::new(clauses))
}

fn encode_constant_sum(coordinates: &[Coordinate], target: i64) -> ConjunctiveFormula {
    let children: Vec<Literal> = coordinates
        .iter()
        .flat_map(|&c| (1..=9u8).map(move |d| lit(c, d)))
        .collect();

    let sum_literal = Literal::composite(children, make_sum_reducer(target, coordinates.len(), 9));
    DisjunctiveClause::new(vec![sum_literal]).to_formula()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Assignment;
    use crate::formula::FormulaEval;

    #[test]
    fn cell_value_encodes_exactly_one_true() {
        let constraint = Constraint::cell_value(Coordinate::new(1, 1), vec![1, 2, 3]);
        let formula = encode(&constraint);

        let mut assignment = Assignment::new();
        assignment.set(variable_name(Coordinate::new(1, 1), 1), true);
        assignment.set(variable_name(Coordinate::new(1, 1), 2), false);
        assignment.set(variable_name(Coordinate::new(1, 1), 3), false);

        assert!(matches!(formula.evaluate(&assignment), FormulaEval::True));
    }

    #[test]
    fn unique_values_forbids_two_cells_sharing_a_digit() {
        let a = Coordinate::new(1, 1);
        let b = Coordinate::new(1, 2);
        let formula = encode(&Constraint::unique_values(vec![a, b]));

        let mut assignment = Assignment::new();
        for d in 1..=9u8 {
            assignment.set(variable_name(a, d), d == 5);
            assignment.set(variable_name(b, d), d == 5);
        }

        assert!(matches!(formula.evaluate(&assignment), FormulaEval::False));
    }

    #[test]
    fn contains_values_requires_every_digit_present() {
        let coords = vec![Coordinate::new(1, 1), Coordinate::new(1, 2)];
        let formula = encode(&Constraint::contains_values(coords.clone(), vec![1, 2]));

        let mut assignment = Assignment::new();
        for d in 1..=9u8 {
            assignment.set(variable_name(coords[0], d), d == 1);
            assignment.set(variable_name(coords[1], d), d == 1);
        }

        // Digit 2 never occurs, so the formula must be false.
        assert!(matches!(formula.evaluate(&assignment), FormulaEval::False));
    }

    #[test]
    fn increasing_values_pigeonholes_endpoints() {
        let coords: Vec<Coordinate> = (1..=4).map(|c| Coordinate::new(1, c)).collect();
        let formula = encode(&Constraint::increasing_values(coords.clone()));

        let mut assignment = Assignment::new();
        // First cell holds 9, which is outside its pigeonholed range [1,6].
        for d in 1..=9u8 {
            assignment.set(variable_name(coords[0], d), d == 9);
        }

        assert!(matches!(formula.evaluate(&assignment), FormulaEval::False));
    }

    #[test]
    fn constant_sum_encodes_to_a_single_clause() {
        let coords = vec![Coordinate::new(1, 1), Coordinate::new(1, 2)];
        let formula = encode(&Constraint::constant_sum(coords, 5));
        // One clause containing the top-level composite literal.
        assert_eq!(formula.clauses().len(), 1);
    }
}
