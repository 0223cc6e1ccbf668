//! Core rules engine for a 4x4 sliding-tile merge puzzle (2048).
//!
//! This crate provides the board-state machine only: initialization, the
//! four-directional slide-and-merge move, scoring, random tile spawning,
//! and win/loss detection. Rendering, input handling, and persistence are
//! left to callers.
//!
//! Randomness is injected as a capability ([`RandomSource`]), so games
//! are deterministic under test and replayable from a seed.
//!
//! # Example
//!
//! ```
//! use game2048_core::{Direction, Game, RngSource};
//!
//! let mut game = Game::with_random(Box::new(RngSource::seeded(42)));
//! game.initialize();
//! game.make_move(Direction::Left)?;
//! assert_eq!(game.move_count()?, 1);
//! # Ok::<(), game2048_core::GameError>(())
//! ```
//!
//! # Modules
//!
//! - [`board`]: the 4x4 grid, slide directions, and cell queries
//! - [`game`]: the game state machine
//! - [`rng`]: the injectable randomness capability

pub mod board;
pub mod game;
pub mod rng;

// Re-export commonly used types
pub use board::{Board, Direction, BOARD_SIZE, EMPTY_CELL, WINNING_TILE};
pub use game::{Coordinate, Game, GameError};
pub use rng::{RandomSource, RngSource, ScriptedSource};
