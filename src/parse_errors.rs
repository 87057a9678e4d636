//! Errors from reading a sudoku out of its text representation.
use crate::board::{block, col, row};

/// A cell entry that could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Linear cell index in `0..=80`, row by row from the top left.
    pub cell: u8,
    /// The offending character.
    pub ch: char,
}

impl InvalidEntry {
    /// Row index of the entry in `0..=8`, from the top.
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }

    /// Column index of the entry in `0..=8`, from the left.
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }

    /// Block index of the entry in `0..=8`, in row-major block order.
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// An error encountered while parsing the line format.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LineParseError {
    /// A character that is neither a digit `1..=9` nor one of the
    /// blanks `'.'`, `'0'`, `'_'`.
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// The line ended after this number of cells.
    #[error("sudoku contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// More than 81 cells on the line.
    #[error("sudoku contains more than 81 cells or is missing comment delimiter")]
    TooManyCells,
    /// Text after the 81 cells without a separating whitespace, comma
    /// or semicolon.
    #[error("missing comment delimiter")]
    MissingCommentDelimiter,
}
