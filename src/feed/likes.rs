use serde::{Deserialize, Serialize};

/// Applause count of a single comment. Only ever goes up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikeCounter(u64);

impl LikeCounter {
    pub fn count(self) -> u64 {
        self.0
    }

    /// Add one like and return the new count
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }
}
