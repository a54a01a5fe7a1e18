//! The constraint model: a closed, tagged set of Sudoku clue variants.
//! Constraints are pure data; translating them to CNF is the encoder's
//! job (`crate::encoder`).

use crate::coordinate::Coordinate;

/// A restriction on valid solutions. Pure data; encoding is the encoder's
/// job.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The cell at `coordinate` holds exactly one of `allowed`.
    CellValue {
        coordinate: Coordinate,
        allowed: Vec<u8>,
    },
    /// No digit appears more than once among `coordinates`.
    UniqueValues { coordinates: Vec<Coordinate> },
    /// Each digit in `digits` occurs at least once among `coordinates`.
    ContainsValues {
        coordinates: Vec<Coordinate>,
        digits: Vec<u8>,
    },
    /// The values at `coordinates` are strictly increasing in list order.
    IncreasingValues { coordinates: Vec<Coordinate> },
    /// The digits at `coordinates` sum to `target`.
    ConstantSum {
        coordinates: Vec<Coordinate>,
        target: i64,
    },
}

impl Constraint {
    pub fn cell_value(coordinate: Coordinate, allowed: Vec<u8>) -> Constraint {
        assert!(
            !allowed.is_empty(),
            "CellValue constraint at {coordinate} has an empty allowed set"
        );
        Constraint::CellValue { coordinate, allowed }
    }

    pub fn unique_values(coordinates: Vec<Coordinate>) -> Constraint {
        Constraint::UniqueValues { coordinates }
    }

    pub fn contains_values(coordinates: Vec<Coordinate>, digits: Vec<u8>) -> Constraint {
        Constraint::ContainsValues { coordinates, digits }
    }

    pub fn increasing_values(coordinates: Vec<Coordinate>) -> Constraint {
        Constraint::IncreasingValues { coordinates }
    }

    pub fn constant_sum(coordinates: Vec<Coordinate>, target: i64) -> Constraint {
        Constraint::ConstantSum { coordinates, target }
    }
}
