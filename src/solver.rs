//! The constraint propagation and backtracking engine.

use crate::bitset::Set;
use crate::board::positions::NEIGHBORS_OF_CELL;
use crate::board::{Cell, Digit, Sudoku};
use crate::consts::*;
use crate::errors::{InvalidClue, Unsolvable};
use crunchy::unroll;

// The engine keeps one 9-bit candidate mask per cell. Inserting a digit
// collapses its cell to a single candidate and removes that digit from the
// masks of the 20 neighbors sharing a row, col or block with it. Every
// neighbor thereby reduced to a single candidate is collapsed in turn,
// until the cascade runs out of forced moves or some cell runs out of
// candidates.
//
// When nothing is forced anymore, the search picks the open cell with the
// fewest candidates and tries each of them on a copy of the board.
// The board is small and `Copy`, so a branch snapshot is a plain
// assignment and backtracking is dropping the copy.

// When the solver finds a solution it can save it or just count
// the latter is marginally faster
#[derive(Debug)]
enum Solutions {
    Count(usize),
    Vector(Vec<Sudoku>),
}

impl Solutions {
    fn len(&self) -> usize {
        match self {
            Solutions::Count(len) => *len,
            Solutions::Vector(v) => v.len(),
        }
    }

    fn into_vec(self) -> Option<Vec<Sudoku>> {
        match self {
            Solutions::Vector(v) => Some(v),
            Solutions::Count(_) => None,
        }
    }
}

/// A live solving board: the candidate masks of all 81 cells.
///
/// Clues go in through [`insert`](Board::insert), [`solve`](Board::solve)
/// collapses everything else, [`to_sudoku`](Board::to_sudoku) reads the
/// result back out. A board solves one puzzle and is then discarded; for
/// the common cases use the convenience methods on [`Sudoku`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    // 9-bit masks, one per cell; a single set bit means the cell is solved
    candidates: UncheckedIndexArray81,
    // cells already processed by propagate()
    collapsed: Set<Cell>,
    // count of cells not yet collapsed
    remaining: u8,
    // set when an accepted clue's cascade ran into a contradiction
    unsolvable: bool,
}

impl Board {
    /// Board with every digit still possible in every cell.
    pub fn new() -> Board {
        Board {
            candidates: UncheckedIndexArray81([Set::ALL; N_CELLS]),
            collapsed: Set::NONE,
            remaining: N_CELLS as u8,
            unsolvable: false,
        }
    }

    /// Builds a board from the clues of `sudoku`.
    ///
    /// Fails on the first clue that conflicts with the clues before it.
    pub fn from_sudoku(sudoku: &Sudoku) -> Result<Board, InvalidClue> {
        let mut board = Board::new();
        for (cell, digit) in sudoku.clues() {
            board.insert(cell, digit)?;
        }
        Ok(board)
    }

    /// Constrains `cell` to exactly `digit` and propagates the consequences.
    ///
    /// If the digit was already eliminated from the cell by earlier clues,
    /// the clue is rejected and the board stays untouched. Inserting the
    /// digit a cell is already collapsed to is a no-op success.
    ///
    /// A successful insert can still render the board unsolvable as the
    /// cascade ripples through; that is not reported here. [`solve`] returns
    /// [`Unsolvable`] for such boards without any search effort.
    ///
    /// [`solve`]: Board::solve
    pub fn insert(&mut self, cell: Cell, digit: Digit) -> Result<(), InvalidClue> {
        let candidates = self.candidates[cell.as_index()];
        if !candidates.contains(digit.as_set()) {
            return Err(InvalidClue { cell, digit });
        }
        if candidates != digit.as_set() {
            self.candidates[cell.as_index()] = digit.as_set();
            if self.propagate(cell).is_err() {
                self.unsolvable = true;
            }
        }
        Ok(())
    }

    // Called on a cell just reduced to a single candidate. Marks it
    // collapsed and removes its digit from all 20 neighbors, checking each
    // one: an emptied neighbor is a contradiction, a neighbor forced down
    // to one candidate collapses recursively.
    //
    // On `Err(Unsolvable)` the board is left partially updated; callers
    // branch on copies, so the partial state is simply dropped.
    fn propagate(&mut self, cell: Cell) -> Result<(), Unsolvable> {
        self.collapsed |= cell;
        self.remaining -= 1;

        // mask of the digits the neighbors may keep
        let keep = !self.candidates[cell.as_index()];
        let neighbors = index(&NEIGHBORS_OF_CELL, cell.as_index());
        unroll! {
            for i in 0..20 {
                let neighbor = Cell::new(neighbors[i]);
                let old = self.candidates[neighbor.as_index()];
                let new = old & keep;
                if new != old {
                    self.candidates[neighbor.as_index()] = new;
                    match new.unique()? {
                        Some(_) if !self.collapsed.contains(neighbor.as_set()) => {
                            self.propagate(neighbor)?;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    // MRV heuristic: the open cell with the fewest candidates, keeping the
    // first minimum in row-major order on ties.
    fn most_constrained_cell(&self) -> Result<Cell, Unsolvable> {
        let mut best: Option<(u8, Cell)> = None;
        for cell in !self.collapsed {
            let n_candidates = self.candidates[cell.as_index()].len();
            if n_candidates == 0 {
                return Err(Unsolvable);
            }
            match best {
                Some((min, _)) if min <= n_candidates => {}
                _ => best = Some((n_candidates, cell)),
            }
        }
        best.map(|(_, cell)| cell).ok_or(Unsolvable)
    }

    /// Searches depth-first for the first completion of the board and
    /// collapses the board to it.
    ///
    /// Returns [`Unsolvable`] if no completion exists; the board is then
    /// left exactly as it was on entry.
    pub fn solve(&mut self) -> Result<(), Unsolvable> {
        if self.unsolvable {
            return Err(Unsolvable);
        }
        if self.remaining == 0 {
            return Ok(());
        }
        let cell = self.most_constrained_cell()?;
        for digit in self.candidates[cell.as_index()] {
            let mut branch = *self;
            branch.candidates[cell.as_index()] = digit.as_set();
            if branch.propagate(cell).is_ok() && branch.solve().is_ok() {
                *self = branch;
                return Ok(());
            }
        }
        Err(Unsolvable)
    }

    // Enumeration variant of solve(): a completed board is recorded into
    // `solutions` and treated like a dead end afterwards, so the search
    // keeps yielding completions until `limit` is reached or the tree is
    // exhausted.
    fn search(&self, limit: usize, solutions: &mut Solutions) {
        debug_assert!(solutions.len() < limit);
        if self.unsolvable {
            return;
        }
        if self.remaining == 0 {
            match solutions {
                Solutions::Count(count) => *count += 1,
                Solutions::Vector(vec) => vec.push(self.to_sudoku()),
            }
            return;
        }
        let cell = match self.most_constrained_cell() {
            Ok(cell) => cell,
            Err(Unsolvable) => return,
        };
        for digit in self.candidates[cell.as_index()] {
            let mut branch = *self;
            branch.candidates[cell.as_index()] = digit.as_set();
            if branch.propagate(cell).is_ok() {
                branch.search(limit, solutions);
            }
            if solutions.len() == limit {
                return;
            }
        }
    }

    /// Find and return up to `limit` completions of the board.
    /// No specific ordering of solutions is promised.
    pub fn solve_at_most(self, limit: usize) -> Vec<Sudoku> {
        let mut solutions = Solutions::Vector(vec![]);
        if limit != 0 {
            self.search(limit, &mut solutions);
        }
        solutions.into_vec().unwrap()
    }

    /// Count the completions of the board, but stop at `limit`.
    pub fn count_at_most(self, limit: usize) -> usize {
        let mut solutions = Solutions::Count(0);
        if limit != 0 {
            self.search(limit, &mut solutions);
        }
        solutions.len()
    }

    /// Reads the board out into a plain grid: the digit of every collapsed
    /// cell, `0` for every open one.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut grid = [0; N_CELLS];
        for cell in Cell::all() {
            let candidates = self.candidates[cell.as_index()];
            if candidates.len() == 1 {
                grid[cell.as_index()] = candidates.one_possibility().get();
            }
        }
        Sudoku(grid)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

// ----------------------------------------------------------------
//                      solver indexing
// ----------------------------------------------------------------
// These functions are only for use in the solver to conditionally
// compile bounds checks in array accesses
// the value space for indexes is limited enough that any error
// is likely to immediately show up in tests
// ----------------------------------------------------------------

#[inline(always)]
fn index<T>(slice: &[T], idx: usize) -> &T {
    if cfg!(feature = "unchecked_indexing") {
        debug_assert!(idx < slice.len());
        unsafe { slice.get_unchecked(idx) }
    } else {
        &slice[idx]
    }
}

#[inline(always)]
fn index_mut<T>(slice: &mut [T], idx: usize) -> &mut T {
    if cfg!(feature = "unchecked_indexing") {
        debug_assert!(idx < slice.len());
        unsafe { slice.get_unchecked_mut(idx) }
    } else {
        &mut slice[idx]
    }
}
// ----------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct UncheckedIndexArray81([Set<Digit>; N_CELLS]);

impl std::ops::Index<usize> for UncheckedIndexArray81 {
    type Output = Set<Digit>;
    fn index(&self, idx: usize) -> &Self::Output {
        index(&self.0, idx)
    }
}

impl std::ops::IndexMut<usize> for UncheckedIndexArray81 {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        index_mut(&mut self.0, idx)
    }
}
