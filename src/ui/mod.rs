//! GUI front end for the Go-Moku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use board_view::BoardOverlay;
pub use game_state::{ComputerState, GameState, COMPUTER_DELAY};
