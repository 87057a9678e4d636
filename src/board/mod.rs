//! Cells, digits and the sudoku grid itself
mod digit;
pub mod positions;
mod sudoku;

pub(crate) use self::positions::*;

pub use self::{
    digit::Digit,
    positions::Cell,
    sudoku::{Sudoku, SudokuLine},
};
