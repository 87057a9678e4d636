#![warn(missing_docs)]
//! A sudoku solving library
//!
//! ## Overview
//!
//! This library solves 9x9 sudokus through constraint propagation and
//! depth-first search. Every clue entered into a [`Board`] immediately
//! removes candidates from the cells sharing a row, column or 3x3 block
//! with it; cells left with a single candidate are filled in and their
//! consequences propagated in turn. What propagation alone cannot decide
//! is searched with backtracking, always branching on the cell with the
//! fewest remaining candidates.
//!
//! The [`Sudoku`] type offers the common operations directly: parsing,
//! printing, solving and checking a puzzle for solution uniqueness.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Sudoku;
//!
//! let sudoku_line =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//!
//! let sudoku = Sudoku::from_str_line(sudoku_line).unwrap();
//!
//! // Solve, print or convert the sudoku to another format
//! if let Some(solution) = sudoku.solve_unique() {
//!     println!("{}", solution);
//!     println!("{}", solution.to_str_line());
//!
//!     let cell_contents: [u8; 81] = solution.to_bytes();
//! }
//! ```

pub mod bitset;
mod board;
mod consts;
pub mod errors;
pub mod parse_errors;
mod solver;

pub use crate::board::{Cell, Digit, Sudoku, SudokuLine};
pub use crate::solver::Board;
