//! Cell indexing and the precomputed constraint topology of the grid.

use crate::consts::*;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}
#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}
#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    BLOCK[cell as usize]
}

#[rustfmt::skip]
static BLOCK: [u8; N_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    0, 0, 0, 1, 1, 1, 2, 2, 2,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    3, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
    6, 6, 6, 7, 7, 7, 8, 8, 8,
];

/// One of the 81 cells of the grid, numbered `0..81` in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a new `Cell`.
    ///
    /// # Panic
    /// Panics in debug builds, if the index is not below 81.
    pub fn new(num: u8) -> Self {
        debug_assert!(num < N_CELLS as u8);
        Cell(num)
    }

    /// Constructs a new `Cell`. Returns `None`, if the index is not below 81.
    pub fn new_checked(num: u8) -> Option<Self> {
        if num < N_CELLS as u8 {
            Some(Cell(num))
        } else {
            None
        }
    }

    /// Returns the cell index contained within.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell index as `usize`.
    pub fn as_index(self) -> usize {
        self.0 as _
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_CELLS as u8).map(Cell::new)
    }

    /// Row index of this cell, `0..9` top to bottom.
    pub fn row(self) -> u8 {
        row(self.0)
    }

    /// Column index of this cell, `0..9` left to right.
    pub fn col(self) -> u8 {
        col(self.0)
    }

    /// Block index of this cell, `0..9` in row-major block order.
    pub fn block(self) -> u8 {
        block(self.0)
    }

    /// Returns an iterator over the 20 cells sharing a row, col or block
    /// with this cell.
    #[inline(always)]
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBORS_OF_CELL[self.as_index()].iter().copied().map(Cell::new)
    }
}

// The tables below encode the entire constraint graph. They are built at
// compile time; nothing is computed or mutated at runtime.

const fn neighbors_of_cell() -> [[u8; N_NEIGHBORS]; N_CELLS] {
    let mut table = [[0u8; N_NEIGHBORS]; N_CELLS];
    let mut cell = 0;
    while cell < N_CELLS {
        let row = cell / 9;
        let col = cell % 9;
        let band = row / 3 * 3;
        let stack = col / 3 * 3;
        let mut n = 0;

        // 8 row neighbors, 8 col neighbors, then the 4 block cells
        // sharing neither row nor col
        let mut i = 0;
        while i < 9 {
            if i != col {
                table[cell][n] = (row * 9 + i) as u8;
                n += 1;
            }
            i += 1;
        }
        let mut i = 0;
        while i < 9 {
            if i != row {
                table[cell][n] = (i * 9 + col) as u8;
                n += 1;
            }
            i += 1;
        }
        let mut r = band;
        while r < band + 3 {
            let mut c = stack;
            while c < stack + 3 {
                if r != row && c != col {
                    table[cell][n] = (r * 9 + c) as u8;
                    n += 1;
                }
                c += 1;
            }
            r += 1;
        }

        cell += 1;
    }
    table
}

/// For every cell, the 20 distinct cells constrained by it.
pub(crate) static NEIGHBORS_OF_CELL: [[u8; N_NEIGHBORS]; N_CELLS] = neighbors_of_cell();

const fn cells_by_house() -> [[u8; 9]; N_HOUSES] {
    let mut houses = [[0u8; 9]; N_HOUSES];
    let mut line = 0;
    while line < 9 {
        let mut i = 0;
        while i < 9 {
            houses[line][i] = (line * 9 + i) as u8;
            houses[line + 9][i] = (i * 9 + line) as u8;
            i += 1;
        }
        line += 1;
    }
    let mut block = 0;
    while block < 9 {
        let band = block / 3;
        let stack = block % 3;
        let mut i = 0;
        while i < 9 {
            let r = band * 3 + i / 3;
            let c = stack * 3 + i % 3;
            houses[block + 18][i] = (r * 9 + c) as u8;
            i += 1;
        }
        block += 1;
    }
    houses
}

/// The 9 cells of every house: rows 0..9, cols 9..18, blocks 18..27.
pub(crate) static CELLS_BY_HOUSE: [[u8; 9]; N_HOUSES] = cells_by_house();
