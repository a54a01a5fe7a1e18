//! The sum reducer: the composite-literal arithmetic predicate that lets a
//! `ConstantSum` constraint participate in propagation without expanding to
//! exponentially many disjunctions.

use crate::assignment::Assignment;
use crate::literal::{Evaluation, Literal};
use crate::naming::parse_variable_name;

/// The digit a variable-referencing literal names, regardless of polarity.
fn digit_of(literal: &Literal) -> i64 {
    parse_variable_name(literal.name()).2 as i64
}

/// Builds the reducer closure for a composite literal tracking a sum of
/// `expected_summands` digits (each in `1..=max_digit`) equal to `target`.
pub fn make_sum_reducer(
    target: i64,
    expected_summands: usize,
    max_digit: u8,
) -> impl Fn(&[Literal], &Assignment) -> Evaluation + 'static {
    move |children, assignment| reduce_sum(children, target, expected_summands, max_digit, assignment)
}

/// A recursive partial evaluator: numeric pruning bounds first, then a
/// collapse to a bool, a single literal, or a smaller specialized
/// composite.
fn reduce_sum(
    children: &[Literal],
    target: i64,
    expected_summands: usize,
    max_digit: u8,
    assignment: &Assignment,
) -> Evaluation {
    let mut current_sum: i64 = 0;
    let mut current_summands: usize = 0;
    let mut unknowns: Vec<Literal> = Vec::new();

    for child in children {
        match child.evaluate(assignment) {
            Evaluation::Bool(decided) => {
                // Positive children contribute when true; negative children
                // (never emitted by this crate's encoder, but handled for
                // safety) contribute when their evaluation is false.
                let contributes = if child.is_positive() { decided } else { !decided };
                if contributes {
                    current_sum += digit_of(child);
                    current_summands += 1;
                }
            }
            Evaluation::Lit(simplified) => unknowns.push(simplified),
        }
    }

    if unknowns.is_empty() || current_summands == expected_summands {
        return Evaluation::Bool(current_sum == target);
    }

    let remaining = target - current_sum;
    let slots = (expected_summands - current_summands) as i64;

    if slots * 1 > remaining {
        return Evaluation::Bool(false);
    }
    if slots * max_digit as i64 < remaining {
        return Evaluation::Bool(false);
    }
    if (unknowns.len() as i64) < slots {
        return Evaluation::Bool(false);
    }

    let mut digits: Vec<i64> = unknowns.iter().map(digit_of).collect();
    digits.sort_unstable();
    let slots_usize = slots as usize;
    let lowest: i64 = digits[..slots_usize].iter().sum();
    let highest: i64 = digits[digits.len() - slots_usize..].iter().sum();
    if lowest > remaining || highest < remaining {
        return Evaluation::Bool(false);
    }

    if slots == 1 {
        let matching: Vec<Literal> = unknowns
            .iter()
            .filter(|l| digit_of(l) == remaining)
            .cloned()
            .collect();
        return match matching.len() {
            0 => Evaluation::Bool(false),
            1 => Evaluation::Lit(matching.into_iter().next().unwrap()),
            _ => Evaluation::Lit(Literal::composite(
                matching,
                make_sum_reducer(remaining, 1, max_digit),
            )),
        };
    }

    Evaluation::Lit(Literal::composite(
        unknowns,
        make_sum_reducer(remaining, slots_usize, max_digit),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::naming::variable_name;

    fn cell_literals(coordinate: Coordinate) -> Vec<Literal> {
        (1..=9)
            .map(|d| Literal::positive(variable_name(coordinate, d)))
            .collect()
    }

    fn sum_literal(coords: &[Coordinate], target: i64) -> Literal {
        let children: Vec<Literal> = coords.iter().flat_map(|c| cell_literals(*c)).collect();
        Literal::composite(children, make_sum_reducer(target, coords.len(), 9))
    }

    #[test]
    fn fully_decided_sum_evaluates_to_bool() {
        let coords = [Coordinate::new(1, 1), Coordinate::new(1, 2)];
        let literal = sum_literal(&coords, 5);

        let mut assignment = Assignment::new();
        for d in 1..=9u8 {
            assignment.set(variable_name(coords[0], d), d == 2);
            assignment.set(variable_name(coords[1], d), d == 3);
        }

        assert!(matches!(literal.evaluate(&assignment), Evaluation::Bool(true)));
    }

    #[test]
    fn impossible_sum_prunes_to_false() {
        // Two cells can sum to at most 17 (8+9); asking for 19 is impossible.
        let coords = [Coordinate::new(1, 1), Coordinate::new(1, 2)];
        let literal = sum_literal(&coords, 19);
        assert!(matches!(
            literal.evaluate(&Assignment::new()),
            Evaluation::Bool(false)
        ));
    }

    #[test]
    fn one_slot_remaining_with_unique_match_collapses_to_a_literal() {
        let coords = [Coordinate::new(1, 1), Coordinate::new(1, 2)];
        let literal = sum_literal(&coords, 6);

        let mut assignment = Assignment::new();
        // First cell decided to hold 2; second cell fully unknown.
        for d in 1..=9u8 {
            assignment.set(variable_name(coords[0], d), d == 2);
        }

        match literal.evaluate(&assignment) {
            Evaluation::Lit(l) => {
                let (_, _, digit) = parse_variable_name(l.name());
                assert_eq!(digit, 4); // 6 - 2 = 4
            }
            other => panic!("expected a collapsed unit literal, got {other:?}"),
        }
    }

    #[test]
    fn monotonicity_false_stays_false_on_superset_assignment() {
        // A sum decided false on a partial assignment must stay false on any
        // extension of that assignment.
        let coords = [Coordinate::new(1, 1), Coordinate::new(1, 2), Coordinate::new(1, 3)];
        let literal = sum_literal(&coords, 2); // three digits in [1,9] sum to at least 3

        let empty = Assignment::new();
        assert!(matches!(literal.evaluate(&empty), Evaluation::Bool(false)));

        let mut extended = Assignment::new();
        for d in 1..=9u8 {
            extended.set(variable_name(coords[0], d), d == 1);
        }
        assert!(matches!(literal.evaluate(&extended), Evaluation::Bool(false)));
    }
}
