//! Scripted move selection for tests and demos

use super::MovePicker;
use crate::board::Pos;

/// Picks `candidates[indices[k] % len]` on its k-th call, cycling through
/// `indices`.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    next: usize,
}

impl ScriptedPicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }

    /// Always takes the first open cell in row-major order
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl MovePicker for ScriptedPicker {
    fn pick(&mut self, candidates: &[Pos]) -> Option<Pos> {
        if candidates.is_empty() || self.indices.is_empty() {
            return None;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        candidates.get(index % candidates.len()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_always_takes_head() {
        let mut picker = ScriptedPicker::first();
        let cands = [Pos::new(0, 3), Pos::new(1, 0)];
        assert_eq!(picker.pick(&cands), Some(Pos::new(0, 3)));
        assert_eq!(picker.pick(&cands[1..]), Some(Pos::new(1, 0)));
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_cycles_and_wraps() {
        let mut picker = ScriptedPicker::new(vec![1, 5]);
        let cands = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];
        assert_eq!(picker.pick(&cands), Some(Pos::new(0, 1)));
        // 5 % 3 == 2
        assert_eq!(picker.pick(&cands), Some(Pos::new(0, 2)));
        assert_eq!(picker.pick(&cands), Some(Pos::new(0, 1)));
    }

    #[test]
    fn test_no_indices() {
        let mut picker = ScriptedPicker::new(Vec::new());
        assert_eq!(picker.pick(&[Pos::new(0, 0)]), None);
    }
}
