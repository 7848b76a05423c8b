//! Rules engine for a game between the human player and a random computer
//!
//! [`GameEngine`] owns the board and is the only thing that mutates it.
//! Every move, human or computer, goes through [`GameEngine::try_move`]:
//!
//! 1. **Validate**: finished game, bounds, occupancy, turn ownership
//! 2. **Place** the mark and record the move
//! 3. **Win check** on the four axes through the placed cell
//! 4. **Draw check** when no win was found and the board is full
//! 5. **Flip the turn**, unless the game just ended
//!
//! # Example
//!
//! ```
//! use gomoku::{GameEngine, Mark, ScriptedPicker};
//!
//! let mut engine = GameEngine::with_picker(6, ScriptedPicker::first());
//!
//! assert!(engine.apply_move(2, 2, Mark::Player));
//! assert!(!engine.is_player_turn());
//!
//! // The scripted picker takes the first open cell
//! let pos = engine.apply_random_computer_move();
//! assert_eq!(pos.map(|p| (p.row, p.col)), Some((0, 0)));
//! assert!(engine.is_player_turn());
//! ```

use log::{debug, info, trace};

use crate::board::{Board, Mark, Pos};
use crate::error::MoveError;
use crate::rules::{find_line_at_pos, has_five_at_pos, validate_move, GameStatus, Turn};
use crate::search::{MovePicker, RandomPicker};

/// Game state plus the computer's move source
pub struct GameEngine {
    board: Board,
    turn: Turn,
    status: GameStatus,
    history: Vec<(Pos, Mark)>,
    picker: Box<dyn MovePicker + Send>,
}

impl GameEngine {
    /// New game on a `size` x `size` board; the computer draws from OS entropy.
    ///
    /// Boards smaller than five can never be won, only drawn.
    pub fn new(size: u8) -> Self {
        Self::with_picker(size, RandomPicker::from_entropy())
    }

    /// New game with an explicit computer move source
    pub fn with_picker(size: u8, picker: impl MovePicker + Send + 'static) -> Self {
        Self {
            board: Board::new(size),
            turn: Turn::Player,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(size as usize * size as usize),
            picker: Box::new(picker),
        }
    }

    /// Play `mark` at `(row, col)`.
    ///
    /// Returns the status after the move. On error nothing changes.
    pub fn try_move(&mut self, row: i32, col: i32, mark: Mark) -> Result<GameStatus, MoveError> {
        let pos = match validate_move(&self.board, row, col, mark, self.turn, self.status) {
            Ok(pos) => pos,
            Err(err) => {
                trace!("rejected {:?} at ({}, {}): {}", mark, row, col, err);
                return Err(err);
            }
        };

        self.board.place(pos, mark);
        self.history.push((pos, mark));
        debug!("{:?} plays ({}, {})", mark, pos.row, pos.col);

        if has_five_at_pos(&self.board, pos, mark) {
            self.status = GameStatus::won_by(mark);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.turn = self.turn.other();
        }

        if self.status.is_terminal() {
            info!(
                "game over after {} moves: {:?}",
                self.history.len(),
                self.status
            );
        }
        Ok(self.status)
    }

    /// Play `mark` at `(row, col)`, reporting only whether the move was
    /// accepted.
    pub fn apply_move(&mut self, row: i32, col: i32, mark: Mark) -> bool {
        self.try_move(row, col, mark).is_ok()
    }

    /// Let the computer play one of the open cells.
    ///
    /// Does nothing, and leaves the picker untouched, when the game is over,
    /// when it is the player's turn, or when no cell is open. Returns the
    /// cell played.
    pub fn apply_random_computer_move(&mut self) -> Option<Pos> {
        if self.status.is_terminal() || self.turn != Turn::Computer {
            return None;
        }

        let candidates = self.board.empty_cells();
        if candidates.is_empty() {
            return None;
        }

        let pos = self.picker.pick(&candidates)?;
        match self.try_move(pos.row as i32, pos.col as i32, Mark::Computer) {
            Ok(_) => {
                debug!(
                    "computer picked ({}, {}) from {} open cells",
                    pos.row,
                    pos.col,
                    candidates.len()
                );
                Some(pos)
            }
            Err(err) => {
                trace!("computer pick ({}, {}) dropped: {}", pos.row, pos.col, err);
                None
            }
        }
    }

    /// Snapshot of the board; changing it does not affect the game
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[inline]
    pub fn is_player_turn(&self) -> bool {
        self.turn == Turn::Player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// "You win!", "Computer wins!", "It's a draw!", or empty while playing
    #[inline]
    pub fn result_message(&self) -> &'static str {
        self.status.message()
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Cells of the winning run, once someone has won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.status.winner()?;
        let (pos, _) = *self.history.last()?;
        find_line_at_pos(&self.board, pos, winner)
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("status", &self.status)
            .field("moves", &self.history.len())
            .finish_non_exhaustive()
    }
}
