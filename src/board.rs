//! Per-player grid of cell states. Knows nothing about ships.

use crate::bitboard::CellMask;
use crate::common::{Coord, EngineError};
use crate::config::BOARD_SIZE;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Read-only copy of a board for display collaborators.
pub type BoardSnapshot = [[Cell; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: BoardSnapshot,
}

impl Board {
    /// All-empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Coord::new(row, col).validate()?;
        Ok(self.cells[row][col])
    }

    /// Overwrite a cell. Any transition is allowed.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        Coord::new(row, col).validate()?;
        self.cells[row][col] = cell;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// Mask of cells holding an intact ship segment.
    pub fn ship_mask(&self) -> CellMask {
        CellMask::from_fn(|r, c| self.cells[r][c] == Cell::Ship)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
