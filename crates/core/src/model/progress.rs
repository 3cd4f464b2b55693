use serde::{Deserialize, Serialize};

use crate::percent::deserialize_lenient;

/// Server-computed completion counters for a stage or repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetrics {
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub percent: f64,
}

impl ProgressMetrics {
    #[must_use]
    pub fn new(completed: u32, total: u32, percent: f64) -> Self {
        Self {
            completed,
            total,
            percent,
        }
    }

    /// Complete means at least one task and every task done.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
