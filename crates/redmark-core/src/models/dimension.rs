use serde::{Deserialize, Serialize};

/// Score for one rubric dimension with its feedback.
///
/// Invariant: `score <= max_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u32,
    pub max_score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

impl DimensionScore {
    /// Zero-score dimension with the given cap.
    pub fn zero(max_score: u32) -> Self {
        Self {
            score: 0,
            max_score,
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }

    /// True when the dimension earned its full cap.
    pub fn is_full(&self) -> bool {
        self.score == self.max_score
    }
}
