//! Puzzle clues: initial constraints on a board other than given cell
//! values. A clue decomposes into one or more `Constraint`s the moment
//! it's applied to a board.

use crate::board::Board;
use crate::constraint::Constraint;
use crate::coordinate::Coordinate;

/// A clue applied to a board, producing the constraints it implies.
pub trait Clue {
    fn apply(&self, board: &Board) -> Vec<Constraint>;
}

/// A run of cells whose values strictly increase along the run.
#[derive(Debug, Clone)]
pub struct Thermometer {
    coordinates: Vec<Coordinate>,
}

impl Thermometer {
    pub fn new(coordinates: Vec<Coordinate>) -> Thermometer {
        Thermometer { coordinates }
    }
}

impl Clue for Thermometer {
    fn apply(&self, _board: &Board) -> Vec<Constraint> {
        vec![Constraint::increasing_values(self.coordinates.clone())]
    }
}

/// A group of cells, not necessarily contiguous, summing to a fixed value.
#[derive(Debug, Clone)]
pub struct Sum {
    coordinates: Vec<Coordinate>,
    target: i64,
}

impl Sum {
    pub fn new(coordinates: Vec<Coordinate>, target: i64) -> Sum {
        Sum { coordinates, target }
    }

    pub fn five(coordinates: Vec<Coordinate>) -> Sum {
        Sum::new(coordinates, 5)
    }

    pub fn ten(coordinates: Vec<Coordinate>) -> Sum {
        Sum::new(coordinates, 10)
    }
}

impl Clue for Sum {
    fn apply(&self, _board: &Board) -> Vec<Constraint> {
        vec![Constraint::constant_sum(self.coordinates.clone(), self.target)]
    }
}

/// A diagonal run, outside the grid's edge, summing to a fixed value.
#[derive(Debug, Clone)]
pub struct LittleKiller {
    coordinates: Vec<Coordinate>,
    target: i64,
}

impl LittleKiller {
    pub fn new(diagonal: Vec<Coordinate>, target: i64) -> LittleKiller {
        LittleKiller { coordinates: diagonal, target }
    }
}

impl Clue for LittleKiller {
    fn apply(&self, _board: &Board) -> Vec<Constraint> {
        vec![Constraint::constant_sum(self.coordinates.clone(), self.target)]
    }
}

/// A group of cells with no repeated digit, summing to a fixed value.
#[derive(Debug, Clone)]
pub struct KillerCage {
    coordinates: Vec<Coordinate>,
    target: i64,
}

impl KillerCage {
    pub fn new(coordinates: Vec<Coordinate>, target: i64) -> KillerCage {
        KillerCage { coordinates, target }
    }
}

impl Clue for KillerCage {
    fn apply(&self, _board: &Board) -> Vec<Constraint> {
        vec![
            Constraint::constant_sum(self.coordinates.clone(), self.target),
            Constraint::unique_values(self.coordinates.clone()),
        ]
    }
}
