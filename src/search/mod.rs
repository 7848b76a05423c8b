//! Move selection for the computer side
//!
//! The computer plays no strategy: it picks one of the open cells. The
//! choice is made through the [`MovePicker`] seam so that games can be
//! replayed from a seed and tests can script the exact cells chosen.
//!
//! Contains:
//! - [`RandomPicker`]: uniform choice over a ChaCha8 stream
//! - [`ScriptedPicker`]: fixed sequence of candidate indices

pub mod random;
pub mod scripted;

use crate::board::Pos;

pub use random::RandomPicker;
pub use scripted::ScriptedPicker;

/// Chooses one move out of a list of legal candidates.
///
/// Candidates are the board's empty cells in row-major order and are never
/// empty when `pick` is called. Returning `None` or a position outside
/// `candidates` makes the computer skip its move.
pub trait MovePicker {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos>;
}

impl<F> MovePicker for F
where
    F: FnMut(&[Pos]) -> Option<Pos>,
{
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        self(candidates)
    }
}
