//! Game state management for the Go-Moku GUI

use std::time::{Duration, Instant};

use crate::{GameConfig, GameEngine, Mark, Pos};

/// Pause before the computer answers, so its move is visible as a separate step
pub const COMPUTER_DELAY: Duration = Duration::from_millis(350);

/// Computer move scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerState {
    Idle,
    Thinking { since: Instant },
}

/// Main game state
pub struct GameState {
    pub engine: GameEngine,
    pub config: GameConfig,
    pub computer: ComputerState,
    pub message: Option<String>,
    games_started: u64,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: Self::engine_for(config, 0),
            config,
            computer: ComputerState::Idle,
            message: None,
            games_started: 1,
        }
    }

    /// Seeded sessions still vary from game to game, but replay in the same order
    fn engine_for(config: GameConfig, game: u64) -> GameEngine {
        GameConfig {
            seed: config.seed.map(|s| s.wrapping_add(game)),
            ..config
        }
        .build_engine()
    }

    pub fn reset(&mut self) {
        self.engine = Self::engine_for(self.config, self.games_started);
        self.games_started += 1;
        self.computer = ComputerState::Idle;
        self.message = None;
    }

    /// Start over on a board of a different size
    pub fn resize(&mut self, size: u8) {
        self.config.size = size;
        self.reset();
    }

    pub fn is_computer_thinking(&self) -> bool {
        matches!(self.computer, ComputerState::Thinking { .. })
    }

    /// Attempt to place the player's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_computer_thinking() {
            return Err("Computer is thinking".to_string());
        }

        self.engine
            .try_move(pos.row as i32, pos.col as i32, Mark::Player)
            .map_err(|e| format!("Invalid move: {e}"))?;
        self.message = None;
        Ok(())
    }

    /// Drive the computer's turn. Returns true while a repaint is needed.
    pub fn update_computer(&mut self, now: Instant) -> bool {
        if self.engine.is_game_over() || self.engine.is_player_turn() {
            self.computer = ComputerState::Idle;
            return false;
        }

        match self.computer {
            ComputerState::Idle => {
                self.computer = ComputerState::Thinking { since: now };
                true
            }
            ComputerState::Thinking { since } if now.duration_since(since) >= COMPUTER_DELAY => {
                self.computer = ComputerState::Idle;
                if self.engine.apply_random_computer_move().is_none() {
                    self.message = Some("Computer could not move".to_string());
                }
                false
            }
            ComputerState::Thinking { .. } => true,
        }
    }

    /// Elapsed computer thinking time
    pub fn thinking_elapsed(&self, now: Instant) -> Option<Duration> {
        match self.computer {
            ComputerState::Thinking { since } => Some(now.duration_since(since)),
            ComputerState::Idle => None,
        }
    }
}
