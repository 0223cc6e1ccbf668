//! Core game state machine.
//!
//! This module contains the `Game` struct and all rules logic: the
//! four-directional slide-and-merge move, scoring, tile spawning, and
//! win/loss detection.

use crate::board::{self, Board, Direction, BOARD_SIZE, EMPTY_CELL, WINNING_TILE};
use crate::rng::{RandomSource, RngSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Spawned tiles are 4 with this probability, otherwise 2.
const FOUR_TILE_CHANCE: f64 = 0.1;

/// Which coordinate of a cell lookup was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinate {
    Row,
    Column,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => write!(f, "Row"),
            Coordinate::Column => write!(f, "Column"),
        }
    }
}

/// Errors reported by the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("game is not initialized")]
    Uninitialized,

    #[error("{coordinate} value {value} must be >= 0 and < {}", BOARD_SIZE)]
    OutOfRange { coordinate: Coordinate, value: i32 },
}

/// The 2048 game state machine.
///
/// A `Game` starts uninitialized; every query and mutation other than
/// [`initialize`](Game::initialize) fails with
/// [`GameError::Uninitialized`] until the first call. Randomness is an
/// injected capability so games can be replayed deterministically.
pub struct Game {
    board: Option<Board>,
    moves: u32,
    score: u32,
    random: Box<dyn RandomSource>,
}

impl Game {
    /// Create an uninitialized game backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_random(Box::new(RngSource::from_entropy()))
    }

    /// Create an uninitialized game with an injected random source
    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self {
            board: None,
            moves: 0,
            score: 0,
            random,
        }
    }

    /// Start a fresh game: clear the board, reset counters, and spawn two
    /// tiles at random free positions. Calling this on a running game
    /// resets it.
    pub fn initialize(&mut self) {
        self.board = Some(Board::new());
        self.moves = 0;
        self.score = 0;
        self.spawn_tile();
        self.spawn_tile();
    }

    /// Number of completed moves since the last [`initialize`](Game::initialize)
    pub fn move_count(&self) -> Result<u32, GameError> {
        self.active()?;
        Ok(self.moves)
    }

    /// Points accumulated from merges
    pub fn score(&self) -> Result<u32, GameError> {
        self.active()?;
        Ok(self.score)
    }

    /// Value at the given cell, 0 for empty.
    ///
    /// Coordinates are signed so callers get a precise out-of-range error
    /// naming the offending coordinate; the row is checked first.
    pub fn value_at(&self, row: i32, col: i32) -> Result<u32, GameError> {
        let board = self.active()?;
        let row = in_range(Coordinate::Row, row)?;
        let col = in_range(Coordinate::Column, col)?;
        Ok(board.get(row, col))
    }

    /// Overwrite a cell, for test and debug setups.
    ///
    /// Out-of-range coordinates and values that are not a power of two in
    /// [2, 2048] are silently ignored. Score and move counter are never
    /// touched.
    pub fn set_tile_at(&mut self, row: i32, col: i32, value: u32) -> Result<(), GameError> {
        let board = self.board.as_mut().ok_or(GameError::Uninitialized)?;
        if let (Ok(row), Ok(col)) = (
            in_range(Coordinate::Row, row),
            in_range(Coordinate::Column, col),
        ) {
            if board::is_tile_value(value) {
                board.set(row, col, value);
            }
        }
        Ok(())
    }

    /// True iff some cell holds exactly 2048
    pub fn is_won(&self) -> Result<bool, GameError> {
        Ok(self.active()?.contains(WINNING_TILE))
    }

    /// True iff the game is won, or the board is full and no adjacent
    /// equal pair remains to merge
    pub fn is_over(&self) -> Result<bool, GameError> {
        let board = self.active()?;
        Ok(board.contains(WINNING_TILE)
            || (board.free_cells() == 0 && !board.has_adjacent_pair()))
    }

    /// Slide all tiles toward the accumulation edge of `direction`,
    /// merging adjacent equal pairs once each, then spawn one tile and
    /// increment the move counter.
    ///
    /// Each line perpendicular to the slide axis is reduced independently:
    /// its non-empty values, read from the accumulation edge, are paired
    /// greedily, so a tile produced by a merge never merges again in the
    /// same move. A move that changes nothing still spawns and still
    /// counts. The spawn is skipped when no cell is free.
    pub fn make_move(&mut self, direction: Direction) -> Result<(), GameError> {
        let board = self.board.as_mut().ok_or(GameError::Uninitialized)?;

        let mut gained = 0;
        for line in 0..BOARD_SIZE {
            let mut packed: Vec<u32> = Vec::with_capacity(BOARD_SIZE);
            let mut pending: Option<u32> = None;

            for slot in 0..BOARD_SIZE {
                let (row, col) = direction.cell(line, slot);
                let value = board.get(row, col);
                if value == EMPTY_CELL {
                    continue;
                }
                match pending {
                    Some(held) if held == value => {
                        packed.push(held + value);
                        gained += held + value;
                        pending = None;
                    }
                    Some(held) => {
                        packed.push(held);
                        pending = Some(value);
                    }
                    None => pending = Some(value),
                }
            }
            if let Some(held) = pending {
                packed.push(held);
            }

            for slot in 0..BOARD_SIZE {
                let (row, col) = direction.cell(line, slot);
                board.set(row, col, packed.get(slot).copied().unwrap_or(EMPTY_CELL));
            }
        }

        self.score += gained;
        self.spawn_tile();
        self.moves += 1;
        Ok(())
    }

    /// Diagnostic view of move count, score, and the full grid
    pub fn render(&self) -> Result<String, GameError> {
        let board = self.active()?;
        Ok(format!(
            "Moves: {:<3}\tScore: {:<7}\n{}",
            self.moves, self.score, board
        ))
    }

    /// Spawn one tile (2 with probability 0.9, else 4) at a uniformly
    /// random free position. The value is drawn before the position; the
    /// spawn is skipped on a full board.
    fn spawn_tile(&mut self) {
        let board = match self.board.as_mut() {
            Some(board) => board,
            None => return,
        };
        let value = if self.random.pick_unit() >= 1.0 - FOUR_TILE_CHANCE {
            4
        } else {
            2
        };
        let free = board.free_cells();
        if free == 0 {
            return;
        }
        let index = self.random.pick_index(0, free);
        board.place_at_free_index(index, value);
    }

    fn active(&self) -> Result<&Board, GameError> {
        self.board.as_ref().ok_or(GameError::Uninitialized)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("moves", &self.moves)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

fn in_range(coordinate: Coordinate, value: i32) -> Result<usize, GameError> {
    if (0..BOARD_SIZE as i32).contains(&value) {
        Ok(value as usize)
    } else {
        Err(GameError::OutOfRange { coordinate, value })
    }
}
