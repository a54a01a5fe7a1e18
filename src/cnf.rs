//! CNF utilities shared by the encoder.

use crate::clause::DisjunctiveClause;
use crate::formula::ConjunctiveFormula;
use crate::literal::Literal;

/// Returns the formula specifying that exactly one of `literals` is true:
/// one at-least-one clause plus one at-most-one clause per unordered pair.
/// Quadratic in `|literals|`, which is fine at the n=9 scale this crate
/// operates at.
pub fn exactly_one_true(literals: &[Literal]) -> ConjunctiveFormula {
    let mut clauses = Vec::new();
    clauses.push(DisjunctiveClause::new(literals.to_vec()));

    for (i, a) in literals.iter().enumerate() {
        for b in &literals[i + 1..] {
            clauses.push(DisjunctiveClause::new(vec![a.negate(), b.negate()]));
        }
    }

    ConjunctiveFormula::new(clauses)
}

/// Returns the cartesian product of `sets`: all tuples drawing one element
/// from each set, in stable order.
pub fn cartesian_product<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut product: Vec<Vec<T>> = vec![Vec::new()];
    for set in sets {
        let mut next = Vec::with_capacity(product.len() * set.len());
        for prefix in &product {
            for item in set {
                let mut extended = prefix.clone();
                extended.push(item.clone());
                next.push(extended);
            }
        }
        product = next;
    }
    product
}
