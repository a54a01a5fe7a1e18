//! Board / geometry: the cell grid, row/col/region/diagonal enumeration,
//! given-value management, and the board <-> assignment round-trip.

use std::collections::BTreeMap;
use std::fmt;

use crate::assignment::Assignment;
use crate::clue::Clue;
use crate::constraint::Constraint;
use crate::coordinate::Coordinate;
use crate::naming::parse_variable_name;
use crate::rules::{BasicSudokuRules, Rule};

/// A Sudoku board: its geometry, its given digits, and the rules/clues that
/// extend the default constraint set.
pub struct Board {
    size: u8,
    region_height: u8,
    region_width: u8,
    givens: BTreeMap<Coordinate, u8>,
    rules: Vec<Box<dyn Rule>>,
    extra_constraints: Vec<Constraint>,
}

impl Board {
    /// A standard 9x9 board with no givens and the default Sudoku rules.
    pub fn empty() -> Board {
        Board {
            size: 9,
            region_height: 3,
            region_width: 3,
            givens: BTreeMap::new(),
            rules: vec![Box::new(BasicSudokuRules)],
            extra_constraints: Vec::new(),
        }
    }

    /// A standard board with the given initial cells populated.
    pub fn with_givens(givens: BTreeMap<Coordinate, u8>) -> Board {
        let mut board = Board::empty();
        board.givens = givens;
        board
    }

    /// Adds a given digit, consuming and returning the board (boards are
    /// immutable values: each transformation produces a new instance).
    pub fn with_given(mut self, coordinate: Coordinate, digit: u8) -> Board {
        self.givens.insert(coordinate, digit);
        self
    }

    /// Adds an additional rule (e.g. [`crate::rules::UniqueDiagonalRule`]).
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Board {
        self.rules.push(Box::new(rule));
        self
    }

    /// Applies a clue, immediately decomposing it into the constraints it
    /// implies.
    pub fn with_clue(mut self, clue: &dyn Clue) -> Board {
        self.extra_constraints.extend(clue.apply(&self));
        self
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn region_height(&self) -> u8 {
        self.region_height
    }

    pub fn region_width(&self) -> u8 {
        self.region_width
    }

    /// The digit at `coordinate`, if given.
    pub fn value(&self, coordinate: Coordinate) -> Option<u8> {
        self.givens.get(&coordinate).copied()
    }

    pub fn givens(&self) -> &BTreeMap<Coordinate, u8> {
        &self.givens
    }

    /// All digits a cell may hold: `1..=size`.
    pub fn all_values(&self) -> Vec<u8> {
        (1..=self.size).collect()
    }

    /// Every coordinate on the board, row-major.
    pub fn all_coordinates(&self) -> Vec<Coordinate> {
        let mut coordinates = Vec::with_capacity(self.size as usize * self.size as usize);
        for row in 1..=self.size {
            for col in 1..=self.size {
                coordinates.push(Coordinate::new(row, col));
            }
        }
        coordinates
    }

    /// The coordinates in `row`, left to right.
    pub fn row(&self, row: u8) -> Vec<Coordinate> {
        (1..=self.size).map(|col| Coordinate::new(row, col)).collect()
    }

    /// The coordinates in `col`, top to bottom.
    pub fn col(&self, col: u8) -> Vec<Coordinate> {
        (1..=self.size).map(|row| Coordinate::new(row, col)).collect()
    }

    /// The coordinates in the region at 1-indexed region position
    /// `(region_row, region_col)`.
    pub fn region(&self, region_row: u8, region_col: u8) -> Vec<Coordinate> {
        let mut coordinates = Vec::with_capacity(self.region_height as usize * self.region_width as usize);
        for i in 1..=self.region_height {
            let row = self.region_height * (region_row - 1) + i;
            for j in 1..=self.region_width {
                let col = self.region_width * (region_col - 1) + j;
                coordinates.push(Coordinate::new(row, col));
            }
        }
        coordinates
    }

    pub fn all_rows(&self) -> Vec<Vec<Coordinate>> {
        (1..=self.size).map(|r| self.row(r)).collect()
    }

    pub fn all_cols(&self) -> Vec<Vec<Coordinate>> {
        (1..=self.size).map(|c| self.col(c)).collect()
    }

    pub fn all_regions(&self) -> Vec<Vec<Coordinate>> {
        let regions_per_row = self.size / self.region_width;
        let regions_per_col = self.size / self.region_height;
        let mut regions = Vec::with_capacity(regions_per_row as usize * regions_per_col as usize);
        for region_row in 1..=regions_per_col {
            for region_col in 1..=regions_per_row {
                regions.push(self.region(region_row, region_col));
            }
        }
        regions
    }

    /// The coordinates on the 45-degree line from `start` to `end`,
    /// inclusive, in order.
    ///
    /// Panics if `start`/`end` are not on a 45-degree line: a malformed
    /// clue is a programming error, not a recoverable outcome.
    pub fn diagonal(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        let row_sign: i32 = if end.row() < start.row() { -1 } else { 1 };
        let col_sign: i32 = if end.col() < start.col() { -1 } else { 1 };

        let rows = (end.row() as i32 - start.row() as i32) * row_sign;
        let cols = (end.col() as i32 - start.col() as i32) * col_sign;
        if rows != cols {
            panic!("not on a diagonal: {start}, {end}");
        }

        (0..=rows)
            .map(|i| {
                let row = start.row() as i32 + row_sign * i;
                let col = start.col() as i32 + col_sign * i;
                Coordinate::new(row as u8, col as u8)
            })
            .collect()
    }

    /// The (up to eight) cells a knight's move away from `coordinate`,
    /// clipped to the board.
    pub fn knight_moves(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        const OFFSETS: [(i32, i32); 8] = [
            (1, 2), (2, 1), (2, -1), (1, -2),
            (-1, -2), (-2, -1), (-2, 1), (-1, 2),
        ];

        OFFSETS
            .iter()
            .filter_map(|(dr, dc)| {
                let row = coordinate.row() as i32 + dr;
                let col = coordinate.col() as i32 + dc;
                if (1..=self.size as i32).contains(&row) && (1..=self.size as i32).contains(&col) {
                    Some(Coordinate::new(row as u8, col as u8))
                } else {
                    None
                }
            })
            .collect()
    }

    /// All constraints implied by this board: rule-derived constraints,
    /// explicitly-added constraints, and one `CellValue(c, {d})` per given
    /// digit.
    pub fn all_constraints(&self) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        for rule in &self.rules {
            constraints.extend(rule.constraints(self));
        }
        constraints.extend(self.extra_constraints.iter().cloned());
        for (&coordinate, &digit) in &self.givens {
            constraints.push(Constraint::cell_value(coordinate, vec![digit]));
        }
        constraints
    }
}

/// Recovers a board from a solved assignment: every variable mapped to
/// `true` becomes a given on a fresh board.
pub fn parse_state(assignment: &Assignment) -> Board {
    let mut givens = BTreeMap::new();
    for (name, value) in assignment.iter() {
        if value {
            let (row, col, digit) = parse_variable_name(name);
            givens.insert(Coordinate::new(row, col), digit);
        }
    }
    Board::with_givens(givens)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.size {
            let mut cells = Vec::with_capacity(self.size as usize);
            for col in 1..=self.size {
                let ch = match self.value(Coordinate::new(row, col)) {
                    Some(digit) => std::char::from_digit(digit as u32, 10).unwrap(),
                    None => ' ',
                };
                cells.push(ch);
            }

            let mut line = String::new();
            for (i, ch) in cells.iter().enumerate() {
                line.push(*ch);
                if (i as u8 + 1) % self.region_width == 0 && i as u8 + 1 != self.size {
                    line.push('|');
                } else if i as u8 + 1 != self.size {
                    line.push(' ');
                }
            }
            writeln!(f, "{line}")?;

            if row % self.region_height == 0 && row != self.size {
                writeln!(f, "{}", "-".repeat(line.len()))?;
            }
        }
        Ok(())
    }
}
