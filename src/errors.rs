//! Errors reported by the solving engine.
use crate::board::{Cell, Digit};
#[cfg(doc)]
use crate::{Board, Sudoku};

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Terminal result of [`Board::solve`]: the puzzle admits no completion.
///
/// Not an abnormal condition; a batch driver tallies it like any other
/// outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("sudoku has no solution")]
pub struct Unsolvable;

/// Error for [`Board::insert`]: the digit was already eliminated from the
/// cell by previously inserted clues.
///
/// The board is left unchanged. Recoverable; the caller may keep inserting
/// other clues and solving.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("digit {} is not a candidate of cell r{}c{}", .digit, .cell.row() + 1, .cell.col() + 1)]
pub struct InvalidClue {
    /// The cell the clue was aimed at.
    pub cell: Cell,
    /// The rejected digit.
    pub digit: Digit,
}
