//! Literal algebra.
//!
//! A [`Literal`] is one of three variants: a reference to a variable
//! (`Positive`), its negation (`Negative`), or a lazy predicate over a set of
//! child literals (`Composite`) used only by the sum-constraint encoding.
//! Composite literals let an arithmetic-sum constraint participate in unit
//! propagation without ever being expanded to exponentially many
//! disjunctions.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::assignment::Assignment;

/// The result of evaluating a [`Literal`] under a partial [`Assignment`]:
/// either a fully-determined Boolean, or a simplified literal.
#[derive(Debug, Clone)]
pub enum Evaluation {
    Bool(bool),
    Lit(Literal),
}

/// A Boolean literal: a variable reference, its negation, or a composite
/// arithmetic predicate.
#[derive(Clone)]
pub enum Literal {
    Positive(Rc<str>),
    Negative(Box<Literal>),
    Composite(Rc<Composite>),
}

/// A reducer closure paired with the child literals it inspects.
///
/// The reducer is a pure function of `(children, assignment)`: given the
/// current partial assignment it returns either a fully-determined bool, a
/// single literal (enabling unit propagation once the clause collapses to
/// it), or, via a fresh `Literal::Composite`, a smaller, specialized
/// composite literal.
pub struct Composite {
    children: Vec<Literal>,
    reducer: Box<dyn Fn(&[Literal], &Assignment) -> Evaluation>,
}

impl Literal {
    /// A literal referencing the variable named `name`.
    pub fn positive(name: impl Into<Rc<str>>) -> Literal {
        Literal::Positive(name.into())
    }

    /// A composite literal over `children`, whose truth value is computed by
    /// `reducer` each time it is evaluated.
    pub fn composite(
        children: Vec<Literal>,
        reducer: impl Fn(&[Literal], &Assignment) -> Evaluation + 'static,
    ) -> Literal {
        Literal::Composite(Rc::new(Composite {
            children,
            reducer: Box::new(reducer),
        }))
    }

    /// The children of a composite literal, for reducers that recurse.
    pub fn children(&self) -> &[Literal] {
        match self {
            Literal::Composite(c) => &c.children,
            _ => &[],
        }
    }

    /// Negates this literal. Negating a positive yields a negative and vice
    /// versa; negation is involutive.
    pub fn negate(&self) -> Literal {
        match self {
            Literal::Positive(_) => Literal::Negative(Box::new(self.clone())),
            Literal::Negative(inner) => (**inner).clone(),
            Literal::Composite(_) => Literal::Negative(Box::new(self.clone())),
        }
    }

    /// The single variable name this literal references.
    ///
    /// Composite literals reference many variables and have no single name;
    /// calling this on one is a programming error, since unit propagation
    /// never reaches a composite down to a lone name (composite unit
    /// literals are skipped).
    pub fn name(&self) -> &str {
        match self {
            Literal::Positive(name) => name,
            Literal::Negative(inner) => inner.name(),
            Literal::Composite(_) => panic!("name() called on a composite literal"),
        }
    }

    /// The set of variable names this literal references.
    pub fn names(&self) -> Vec<Rc<str>> {
        match self {
            Literal::Positive(name) => vec![name.clone()],
            Literal::Negative(inner) => inner.names(),
            Literal::Composite(c) => {
                let mut names: Vec<Rc<str>> =
                    c.children.iter().flat_map(|l| l.names()).collect();
                names.sort();
                names.dedup();
                names
            }
        }
    }

    /// Evaluates this literal under `assignment`, returning a fully
    /// determined bool or a simplified literal.
    pub fn evaluate(&self, assignment: &Assignment) -> Evaluation {
        match self {
            Literal::Positive(name) => match assignment.get(name) {
                Some(value) => Evaluation::Bool(value),
                None => Evaluation::Lit(self.clone()),
            },
            Literal::Negative(inner) => match inner.evaluate(assignment) {
                Evaluation::Bool(value) => Evaluation::Bool(!value),
                Evaluation::Lit(lit) => Evaluation::Lit(lit.negate()),
            },
            Literal::Composite(c) => (c.reducer)(&c.children, assignment),
        }
    }

    /// True iff this literal is a `Positive` reference (used by the sum
    /// reducer to determine polarity of "true-contributing" children).
    pub fn is_positive(&self) -> bool {
        matches!(self, Literal::Positive(_))
    }
}

impl PartialEq for Literal {
    /// Identity for dedup/complement detection: signed name for
    /// positive/negative literals, reference identity for composites.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Positive(a), Literal::Positive(b)) => a == b,
            (Literal::Negative(a), Literal::Negative(b)) => a == b,
            (Literal::Composite(a), Literal::Composite(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Literal::Positive(name) => {
                0u8.hash(state);
                name.hash(state);
            }
            Literal::Negative(inner) => {
                1u8.hash(state);
                inner.hash(state);
            }
            Literal::Composite(c) => {
                2u8.hash(state);
                (Rc::as_ptr(c) as usize).hash(state);
            }
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Positive(name) => write!(f, "{name}"),
            Literal::Negative(inner) => write!(f, "~{inner:?}"),
            Literal::Composite(c) => write!(f, "composite({} children)", c.children.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(&str, bool)]) -> Assignment {
        let mut a = Assignment::new();
        for (name, value) in pairs {
            a.set(*name, *value);
        }
        a
    }

    #[test]
    fn negation_is_involutive() {
        let p = Literal::positive("1-1:1");
        assert_eq!(p.negate().negate(), p);
    }

    #[test]
    fn negating_composite_wraps_it_opaquely() {
        let composite = Literal::composite(vec![], |_, _| Evaluation::Bool(true));
        let negated = composite.negate();
        assert!(matches!(negated, Literal::Negative(_)));
        // Double negation of a composite returns the same reference-identical composite.
        assert_eq!(negated.negate(), composite);
    }

    #[test]
    fn positive_evaluation_matches_assignment() {
        let p = Literal::positive("1-1:1");
        let a = assignment(&[("1-1:1", true)]);
        assert!(matches!(p.evaluate(&a), Evaluation::Bool(true)));

        let empty = Assignment::new();
        assert!(matches!(p.evaluate(&empty), Evaluation::Lit(_)));
    }

    #[test]
    fn negative_evaluation_is_the_negated_bool() {
        let p = Literal::positive("1-1:1");
        let n = p.negate();
        let a = assignment(&[("1-1:1", true)]);
        assert!(matches!(n.evaluate(&a), Evaluation::Bool(false)));
    }

    #[test]
    fn positive_and_negative_of_same_name_are_distinct_identities() {
        let p = Literal::positive("1-1:1");
        let n = p.negate();
        assert_ne!(p, n);
    }

    #[test]
    fn two_distinct_composites_are_not_equal() {
        let a = Literal::composite(vec![], |_, _| Evaluation::Bool(true));
        let b = Literal::composite(vec![], |_, _| Evaluation::Bool(true));
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
