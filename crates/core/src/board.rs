//! Board module - the N x N tile grid
//!
//! Cells hold `0` for empty or a power of two. Coordinates are `(row, col)`,
//! both `0..BOARD_SIZE`, with row 0 at the top and column 0 on the left.
//! The board is `Copy`: undo history stores copies, never aliases.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_SIZE, CELL_COUNT, EMPTY};

/// Row-major grid storage.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Coordinates of every empty cell, in row-major order.
pub type EmptyCells = ArrayVec<(usize, usize), CELL_COUNT>;

/// The game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows.
    pub fn from_rows(cells: Grid) -> Self {
        Self { cells }
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Get cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All empty cells, row-major. Stack-only, never allocates.
    pub fn empty_cells(&self) -> EmptyCells {
        let mut out = ArrayVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == EMPTY {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == EMPTY).count()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c == EMPTY)
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    /// Sum of all tile values.
    pub fn sum(&self) -> i64 {
        self.cells.iter().flatten().map(|&c| c as i64).sum()
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [[EMPTY; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row][col]
    }
}
