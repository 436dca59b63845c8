//! The 3x3 board.
//!
//! ## Layout
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A marked cell never reverts to empty except via [`Board::clear`].

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Player),
}

impl Cell {
    /// Whether the cell holds no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A 3x3 tic-tac-toe board, cells in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get the cell at `index`, or `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether `index` is on the board and unmarked.
    #[must_use]
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Mark the cell at `index` for `player`.
    ///
    /// Returns `false` without changing the board if the index is out of
    /// range or the cell is already marked.
    pub fn mark(&mut self, index: usize, player: Player) -> bool {
        if !self.is_vacant(index) {
            return false;
        }
        self.cells[index] = Cell::Marked(player);
        true
    }

    /// Whether every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl std::fmt::Display for Board {
    /// Render the board as a 3-line grid, `.` for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(p) => write!(f, "{p}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
