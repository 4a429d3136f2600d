//! Best-arrangement tracking

use super::RackState;

/// Remembers the highest-scoring arrangement seen during a match
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best_score: u32,
    best_state: Option<RackState>,
}

impl BestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    #[inline]
    #[must_use]
    pub const fn best_state(&self) -> Option<&RackState> {
        self.best_state.as_ref()
    }

    pub fn reset(&mut self) {
        self.best_score = 0;
        self.best_state = None;
    }

    /// Keep `state` if it strictly beats the best score so far
    pub fn observe(&mut self, state: &RackState, score: u32) {
        if score > self.best_score {
            self.best_score = score;
            self.best_state = Some(state.clone());
        }
    }

    /// The best arrangement, if it beats `current_score`
    #[must_use]
    pub fn restore_if_better(&self, current_score: u32) -> Option<&RackState> {
        self.best_state
            .as_ref()
            .filter(|_| self.best_score > current_score)
    }
}
