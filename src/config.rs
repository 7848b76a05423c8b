//! Command line configuration

use clap::{Parser, ValueEnum};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::engine::GameEngine;
use crate::search::RandomPicker;

/// Which front end drives the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Frontend {
    /// Text prompts on stdin/stdout
    #[default]
    Console,
    /// Desktop window
    Gui,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Five-in-a-row against a random computer", long_about = None)]
pub struct Args {
    /// Board size (N x N)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = clap::value_parser!(u8).range(1..=MAX_BOARD_SIZE as i64))]
    pub size: u8,

    /// Seed for the computer's moves; omitted means a fresh game each run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Front end to play with
    #[arg(long, value_enum, default_value_t = Frontend::Console)]
    pub frontend: Frontend,
}

/// Settings needed to start a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: u8,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Fresh engine using the configured seed, if any
    pub fn build_engine(&self) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::with_picker(self.size, RandomPicker::seeded(seed)),
            None => GameEngine::new(self.size),
        }
    }
}

impl From<&Args> for GameConfig {
    fn from(args: &Args) -> Self {
        Self {
            size: args.size,
            seed: args.seed,
        }
    }
}
