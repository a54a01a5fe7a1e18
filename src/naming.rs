//! Bijection between `(row, col, digit)` triples and the canonical variable
//! name used at the SAT boundary.
//!
//! The reference form is `"<row>-<col>:<digit>"`; the only contract that
//! matters is that the three digits can be recovered in order by scanning the
//! name for decimal characters, so other encoders in this crate never need to
//! parse a name themselves.

use crate::coordinate::Coordinate;

/// Builds the canonical variable name for `coordinate` holding `digit`.
pub fn variable_name(coordinate: Coordinate, digit: u8) -> String {
    format!("{}-{}:{}", coordinate.row(), coordinate.col(), digit)
}

/// Recovers `(row, col, digit)` from a canonical variable name.
///
/// Panics if `name` does not contain exactly three decimal digits, which
/// would indicate a name that was never produced by [`variable_name`], a
/// programming error, not a malformed-input condition.
pub fn parse_variable_name(name: &str) -> (u8, u8, u8) {
    let digits: Vec<u8> = name
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    match digits.as_slice() {
        [row, col, digit] => (*row, *col, *digit),
        other => panic!("malformed variable name {name:?}: expected 3 digits, found {other:?}"),
    }
}
