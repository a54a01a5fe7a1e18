//! Text board parser: the 9x9 newline-separated representation used by
//! puzzle files and the CLI.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::coordinate::Coordinate;

/// Parses a board's string representation. Expected to be a 9x9
/// newline-separated string, each character a space or a `1`-`9` digit.
/// Leading/trailing newlines and leading/trailing tabs within lines are
/// trimmed; short or missing lines leave the remaining cells empty.
pub fn parse_board(s: &str) -> Board {
    let mut givens = BTreeMap::new();

    let trimmed = s.trim_matches('\n');
    for (row, line) in trimmed.split('\n').enumerate() {
        let line = line.trim_matches('\t');
        for (col, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            if let Some(digit) = ch.to_digit(10) {
                givens.insert(Coordinate::new(row as u8 + 1, col as u8 + 1), digit as u8);
            }
        }
    }

    Board::with_givens(givens)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "\
5 3  7
6  195
 98    6
8   6   3
4  8 3  1
7   2   6
 6    28
   419  5
    8  79";

    #[test]
    fn parses_a_full_classic_puzzle() {
        let board = parse_board(CLASSIC);
        assert_eq!(board.value(Coordinate::new(1, 1)), Some(5));
        assert_eq!(board.value(Coordinate::new(1, 2)), Some(3));
        assert_eq!(board.value(Coordinate::new(1, 3)), None);
        assert_eq!(board.value(Coordinate::new(9, 9)), Some(9));
    }

    #[test]
    fn trims_leading_and_trailing_newlines() {
        let board = parse_board(&format!("\n\n{CLASSIC}\n\n"));
        assert_eq!(board.value(Coordinate::new(1, 1)), Some(5));
    }

    #[test]
    fn trims_leading_tabs_within_a_line() {
        let board = parse_board("\t\t5 3  7   ");
        assert_eq!(board.value(Coordinate::new(1, 1)), Some(5));
        assert_eq!(board.value(Coordinate::new(1, 2)), Some(3));
    }

    #[test]
    fn short_or_missing_lines_leave_remaining_cells_empty() {
        let board = parse_board("5\n\n3");
        assert_eq!(board.value(Coordinate::new(1, 1)), Some(5));
        assert_eq!(board.value(Coordinate::new(1, 2)), None);
        assert_eq!(board.value(Coordinate::new(2, 1)), None);
        assert_eq!(board.value(Coordinate::new(3, 1)), Some(3));
    }

    #[test]
    fn an_empty_string_parses_to_an_empty_board() {
        let board = parse_board("");
        assert!(board.givens().is_empty());
    }
}
