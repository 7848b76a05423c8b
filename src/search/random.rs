//! Uniform random move selection

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::MovePicker;
use crate::board::Pos;

/// Picks uniformly among the candidates.
///
/// Uses ChaCha8 so a given seed replays the same game on every platform.
#[derive(Clone, Debug)]
pub struct RandomPicker {
    rng: ChaCha8Rng,
}

impl RandomPicker {
    /// Deterministic picker for replays
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MovePicker for RandomPicker {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        candidates.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Pos> {
        (0..6).flat_map(|r| (0..6).map(move |c| Pos::new(r, c))).collect()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let cands = candidates();
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.pick(&cands), b.pick(&cands));
        }
    }

    #[test]
    fn test_picks_from_candidates() {
        let cands = [Pos::new(1, 4), Pos::new(3, 0), Pos::new(5, 5)];
        let mut picker = RandomPicker::seeded(99);
        for _ in 0..100 {
            let pos = picker.pick(&cands);
            assert!(pos.is_some_and(|p| cands.contains(&p)));
        }
    }

    #[test]
    fn test_reaches_every_candidate() {
        let cands = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];
        let mut picker = RandomPicker::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let pos = picker.pick(&cands).unwrap();
            seen[pos.col as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_empty_candidates() {
        let mut picker = RandomPicker::from_entropy();
        assert_eq!(picker.pick(&[]), None);
    }
}
