//! Go-Moku rules engine
//!
//! Five-in-a-row on a square board between a human player and a computer
//! that plays uniformly at random among the open cells:
//! - Square N x N board (6x6 by default)
//! - 5-in-a-row on any axis wins (overlines allowed)
//! - Full board without a winner is a draw
//! - Player (`X`) always moves first, computer (`O`) second
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and text rendering
//! - [`rules`]: Move validation, win detection, turn and status types
//! - [`search`]: Computer move selection behind the [`MovePicker`] seam
//! - [`engine`]: [`GameEngine`], the only owner of game state
//! - [`console`] and [`ui`]: front ends that drive the engine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, Mark, ScriptedPicker};
//!
//! let mut engine = GameEngine::with_picker(6, ScriptedPicker::first());
//!
//! // Player row along the bottom, computer answers in the top-left corner
//! for col in 0..5 {
//!     assert!(engine.apply_move(5, col, Mark::Player));
//!     engine.apply_random_computer_move();
//! }
//!
//! assert!(engine.is_game_over());
//! assert_eq!(engine.result_message(), "You win!");
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::{Args, Frontend, GameConfig};
pub use engine::GameEngine;
pub use error::MoveError;
pub use rules::{GameStatus, Turn, WIN_LENGTH};
pub use search::{MovePicker, RandomPicker, ScriptedPicker};
