use serde::{Deserialize, Serialize};

/// Solution counts per difficulty
///
/// `total` includes records of unknown difficulty, so the three named counts
/// may sum to less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl ProgressStats {
    /// Records counted in `total` but in none of the named classifications
    pub fn unknown(&self) -> usize {
        self.total.saturating_sub(self.easy + self.medium + self.hard)
    }
}
