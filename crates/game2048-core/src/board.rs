//! Game board representation.
//!
//! This module contains:
//! - The fixed 4x4 grid of cell values
//! - Free-cell scanning and row-major free-index placement
//! - Adjacency and win-tile queries used for terminal detection
//! - Slide directions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 4;

/// Marker for an empty cell.
pub const EMPTY_CELL: u32 = 0;

/// Reaching this tile value wins the game.
pub const WINNING_TILE: u32 = 2_048;

/// The four slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All slide directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a line-local slot index to a board index along the slide axis.
    ///
    /// Slot 0 is always the cell nearest the accumulation edge, so the
    /// index order reverses for `Right` and `Down`.
    pub fn edge_index(&self, slot: usize) -> usize {
        match self {
            Direction::Right | Direction::Down => BOARD_SIZE - 1 - slot,
            Direction::Up | Direction::Left => slot,
        }
    }

    /// Board coordinates of the `slot`-th cell (counted from the
    /// accumulation edge) of the `line`-th line perpendicular to this
    /// direction's slide axis.
    pub fn cell(&self, line: usize, slot: usize) -> (usize, usize) {
        match self {
            Direction::Left | Direction::Right => (line, self.edge_index(slot)),
            Direction::Up | Direction::Down => (self.edge_index(slot), line),
        }
    }
}

/// The 4x4 game grid.
///
/// Cells hold either [`EMPTY_CELL`] or a power of two; all mutation goes
/// through the [`Game`](crate::game::Game) state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at the given cell (0 for empty)
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Overwrite the given cell
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Check whether the given cell is empty
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] == EMPTY_CELL
    }

    /// Number of empty cells on the board
    pub fn free_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value == EMPTY_CELL)
            .count()
    }

    /// Place `value` at the `index`-th free cell in row-major scan order.
    ///
    /// Does nothing if `index` is not reached, i.e. fewer than `index + 1`
    /// cells are free.
    pub fn place_at_free_index(&mut self, index: usize, value: u32) {
        let mut seen = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_free(row, col) {
                    if seen == index {
                        self.cells[row][col] = value;
                        return;
                    }
                    seen += 1;
                }
            }
        }
    }

    /// Check whether any two row- or column-adjacent cells hold the same
    /// non-empty value, i.e. whether a merge is still possible.
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col];
                if value == EMPTY_CELL {
                    continue;
                }
                if col + 1 < BOARD_SIZE && self.cells[row][col + 1] == value {
                    return true;
                }
                if row + 1 < BOARD_SIZE && self.cells[row + 1][col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Check whether any cell holds exactly `value`
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&cell| cell == value)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row {
                write!(f, "{:<5}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Check whether `value` is a legal tile value: a power of two in [2, 2048].
pub fn is_tile_value(value: u32) -> bool {
    (2..=WINNING_TILE).contains(&value) && value.is_power_of_two()
}
