use crate::bitset::Set;
use crate::board::positions::CELLS_BY_HOUSE;
use crate::board::{Cell, Digit};
use crate::consts::*;
use crate::errors::FromBytesError;
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::solver::Board;

use std::ops::Deref;
use std::{fmt, str};

/// The main structure exposing all the functionality of the library
///
/// A `Sudoku` is a plain 9×9 grid of digits, `0` standing for an empty
/// cell. All deduction and search happens on [`Board`]; the solving methods
/// here are conveniences that build a board, feed it the clues and extract
/// the result.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Creates a sudoku from a byte array. Empty cells are denoted by 0, clues by the digits 1-9.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().all(|&byte| byte <= 9) {
            true => Ok(Sudoku(bytes)),
            false => Err(FromBytesError(())),
        }
    }

    /// Returns the underlying byte array, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Reads a sudoku in the line format.
    ///
    /// The line format is a concatenation of the cell entries going from
    /// left to right, top to bottom. Digits must be in the range of 1-9;
    /// `'_'`, `'.'` and `'0'` are accepted interchangeably for empty cells.
    ///
    /// An optional comment is allowed after the 81 cells, separated by
    /// ASCII whitespace, a comma or a semicolon.
    ///
    /// Example:
    ///
    /// `..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. optional comment`
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; N_CELLS];
        let mut chars = s.chars();
        for cell in 0..N_CELLS {
            match chars.next() {
                Some(ch @ '1'..='9') => grid[cell] = ch as u8 - b'0',
                Some('_') | Some('.') | Some('0') => {}
                // a delimiter ends the sudoku before all cells were given
                Some(' ') | Some('\t') | None => {
                    return Err(LineParseError::NotEnoughCells(cell as u8))
                }
                Some(ch) => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: cell as u8,
                        ch,
                    }))
                }
            }
        }
        // anything after the 81 cells must be separated from them
        match chars.next() {
            None | Some(' ') | Some('\t') | Some('\r') | Some('\n') | Some(',') | Some(';') => {}
            Some('1'..='9') | Some('_') | Some('.') | Some('0') => {
                return Err(LineParseError::TooManyCells)
            }
            Some(_) => return Err(LineParseError::MissingCommentDelimiter),
        }
        Ok(Sudoku(grid))
    }

    /// Returns the line representation: 81 characters, `'1'`-`'9'` for
    /// entries, `'.'` for empty cells.
    pub fn to_str_line(&self) -> SudokuLine {
        let mut line = [0; N_CELLS];
        for (chr, &entry) in line.iter_mut().zip(self.0.iter()) {
            *chr = match entry {
                0 => b'.',
                _ => entry + b'0',
            };
        }
        SudokuLine(line)
    }

    /// Returns an iterator over the filled cells as `(cell, digit)` pairs,
    /// going from left to right, top to bottom.
    pub fn clues(&self) -> impl Iterator<Item = (Cell, Digit)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &num)| num != 0)
            .map(|(cell, &num)| (Cell::new(cell as u8), Digit::new(num)))
    }

    /// Counts the filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Try to find a solution and fill it in. Returns `true` if a solution was found.
    /// This is a convenience interface. Use one of the other solver methods
    /// to enforce uniqueness or enumerate completions.
    pub fn solve(&mut self) -> bool {
        match self.solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find a solution. If multiple solutions exist, it stops at the first.
    /// Returns `None` if no solution exists or the clues conflict.
    pub fn solve_one(self) -> Option<Sudoku> {
        let mut board = Board::from_sudoku(&self).ok()?;
        board.solve().ok()?;
        Some(board.to_sudoku())
    }

    /// Solve the sudoku and return the solution, iff it is unique.
    pub fn solve_unique(self) -> Option<Sudoku> {
        let mut solutions = self.solve_at_most(2);
        match solutions.len() == 1 {
            true => solutions.pop(),
            false => None,
        }
    }

    /// Solve the sudoku and return the first `limit` solutions found.
    /// If fewer exist, return only those.
    /// No specific ordering of solutions is promised.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        match Board::from_sudoku(&self) {
            Ok(board) => board.solve_at_most(limit),
            Err(_) => vec![],
        }
    }

    /// Count the solutions of the sudoku, but stop at `limit`.
    pub fn count_at_most(self, limit: usize) -> usize {
        match Board::from_sudoku(&self) {
            Ok(board) => board.count_at_most(limit),
            Err(_) => 0,
        }
    }

    /// Checks that all cells are filled and every row, column and block
    /// contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        if self.0.iter().any(|&num| num == 0) {
            return false;
        }
        CELLS_BY_HOUSE.iter().all(|house| {
            let mut digits = Set::<Digit>::NONE;
            for &cell in house {
                digits |= Digit::new(self.0[cell as usize]);
            }
            digits.is_full()
        })
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &entry) in self.0.iter().enumerate() {
            match entry {
                0 => write!(f, ".")?,
                _ => write!(f, "{}", entry)?,
            }
            if cell == N_CELLS - 1 {
                break;
            }
            match (cell / 9, cell % 9) {
                (2, 8) | (5, 8) => write!(f, "\n\n")?, // separate bands
                (_, 8) => writeln!(f)?,
                (_, 2) | (_, 5) => write!(f, "  ")?, // separate stacks
                _ => write!(f, " ")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

/// The line representation of a sudoku: a stack-allocated string of 81
/// characters, digits for entries and `'.'` for empty cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SudokuLine([u8; N_CELLS]);

impl SudokuLine {
    /// The line as `&str`.
    pub fn as_str(&self) -> &str {
        // the buffer only ever holds ASCII digits and '.'
        str::from_utf8(&self.0).unwrap()
    }
}

impl Deref for SudokuLine {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SudokuLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sudoku in line format")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Sudoku, E> {
            Sudoku::from_str_line(v).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            deserializer.deserialize_str(SudokuVisitor)
        }
    }
}
