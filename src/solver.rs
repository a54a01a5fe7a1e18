//! The DPLL solver: a saturating simplify + unit-propagate loop wrapped in
//! recursive case-split branching.

use log::{debug, trace};

use crate::assignment::Assignment;
use crate::formula::{ConjunctiveFormula, FormulaEval};
use crate::literal::{Evaluation, Literal};

/// The outcome of a `solve()` call: either a satisfying assignment, or
/// unsatisfiable. Unsatisfiability is a normal result, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Satisfiability {
    Sat(Assignment),
    Unsat,
}

/// Which variable a branch picks when propagation saturates without
/// deciding the formula. Both orderings are sound; they differ only in
/// search shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchHeuristic {
    /// The first variable name from the shortest remaining clause.
    #[default]
    ShortestClause,
    /// The variable name occurring in the most clauses.
    MostFrequent,
}

impl BranchHeuristic {
    fn pick(&self, formula: &ConjunctiveFormula) -> Option<String> {
        match self {
            BranchHeuristic::ShortestClause => pick_shortest_clause(formula),
            BranchHeuristic::MostFrequent => pick_most_frequent(formula),
        }
    }
}

fn pick_shortest_clause(formula: &ConjunctiveFormula) -> Option<String> {
    formula
        .clauses()
        .iter()
        .min_by_key(|c| c.literals().len())
        .and_then(|c| c.literals().iter().flat_map(|l| l.names()).next())
        .map(|name| name.to_string())
}

fn pick_most_frequent(formula: &ConjunctiveFormula) -> Option<String> {
    use std::collections::BTreeMap;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for clause in formula.clauses() {
        for literal in clause.literals() {
            for name in literal.names() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
        .into_iter()
        .max_by_key(|(name, count)| (*count, std::cmp::Reverse(name.clone())))
        .map(|(name, _)| name)
}

/// A DPLL solver over a single, owned formula.
pub trait Solver {
    fn new(formula: ConjunctiveFormula) -> Self
    where
        Self: Sized;
    fn solve(self) -> Satisfiability;
}

/// Builds a configured [`Solver`] instance; mirrors the constructor-builder
/// shape used elsewhere in this crate (`Board::with_*`).
pub trait SolverBuilder {
    fn build(self, formula: ConjunctiveFormula) -> Box<dyn Solver>;
}

/// The default recursive DPLL solver.
pub struct DpllSolver {
    formula: ConjunctiveFormula,
    heuristic: BranchHeuristic,
}

impl DpllSolver {
    pub fn with_heuristic(formula: ConjunctiveFormula, heuristic: BranchHeuristic) -> DpllSolver {
        DpllSolver { formula, heuristic }
    }
}

impl Solver for DpllSolver {
    fn new(formula: ConjunctiveFormula) -> DpllSolver {
        DpllSolver::with_heuristic(formula, BranchHeuristic::default())
    }

    fn solve(self) -> Satisfiability {
        solve_recursive(&self.formula, Assignment::new(), self.heuristic)
    }
}

/// A [`SolverBuilder`] producing [`DpllSolver`]s with a chosen heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpllSolverBuilder {
    heuristic: BranchHeuristic,
}

impl DpllSolverBuilder {
    pub fn with_heuristic(mut self, heuristic: BranchHeuristic) -> DpllSolverBuilder {
        self.heuristic = heuristic;
        self
    }
}

impl SolverBuilder for DpllSolverBuilder {
    fn build(self, formula: ConjunctiveFormula) -> Box<dyn Solver> {
        Box::new(DpllSolver::with_heuristic(formula, self.heuristic))
    }
}

/// `simplify -> propagate -> (changed => simplify) | (saturated => branch)`
fn solve_recursive(
    formula: &ConjunctiveFormula,
    mut assignment: Assignment,
    heuristic: BranchHeuristic,
) -> Satisfiability {
    let mut current = formula.clone();

    loop {
        match current.evaluate(&assignment) {
            FormulaEval::True => {
                debug!("formula satisfied with {} assigned variables", assignment.len());
                return Satisfiability::Sat(assignment);
            }
            FormulaEval::False => {
                trace!("formula falsified, backtracking");
                return Satisfiability::Unsat;
            }
            FormulaEval::Formula(reduced) => {
                let changed = unit_propagate(&reduced, &mut assignment);
                current = reduced;
                if !changed {
                    break;
                }
            }
        }
    }

    let Some(name) = heuristic.pick(&current) else {
        // No unassigned variable remains but the formula is still
        // undetermined: with no literals left to branch on this is a bug
        // in the encoder, not a search outcome.
        panic!("saturated formula has no variable left to branch on");
    };

    debug!("branching on {name}");
    let mut with_true = assignment.clone();
    with_true.set(&name, true);
    if let Satisfiability::Sat(solved) = solve_recursive(&current, with_true, heuristic) {
        return Satisfiability::Sat(solved);
    }

    let mut with_false = assignment;
    with_false.set(&name, false);
    solve_recursive(&current, with_false, heuristic)
}

/// Assigns every unit clause's forced literal, repeating until no unit
/// clause remains. Composite unit literals are skipped: they cannot
/// directly force a variable, and skipping them does not set `changed`.
fn unit_propagate(formula: &ConjunctiveFormula, assignment: &mut Assignment) -> bool {
    let mut changed = false;

    for clause in formula.clauses() {
        if clause.literals().len() != 1 {
            continue;
        }
        let literal = &clause.literals()[0];
        match literal {
            Literal::Positive(name) => {
                if assignment.get(name).is_none() {
                    assignment.set(name.as_ref(), true);
                    changed = true;
                }
            }
            Literal::Negative(_) => {
                let name = literal.name();
                if assignment.get(name).is_none() {
                    assignment.set(name, false);
                    changed = true;
                }
            }
            Literal::Composite(_) => {
                if let Evaluation::Lit(Literal::Positive(name)) = literal.evaluate(assignment) {
                    if assignment.get(&name).is_none() {
                        assignment.set(name.as_ref(), true);
                        changed = true;
                    }
                }
            }
        }
    }

    changed
}
