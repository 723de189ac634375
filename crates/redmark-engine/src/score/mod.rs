//! Dimension scorers: detection results to bounded scores with feedback.
//!
//! Two shapes only. Additive dimensions start at zero and add tiered point
//! blocks from ordered threshold ladders. Deductive dimensions start at
//! the cap and subtract per-hit amounts under a per-class deduction cap,
//! flooring at zero. Every scorer is a pure function of the text.

pub mod job_description;
pub mod one_pager;
pub mod prd;

use redmark_core::models::DimensionScore;
use smallvec::SmallVec;

/// One row of an additive threshold ladder.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub min_count: u32,
    pub points: u32,
    pub message: &'static str,
}

/// Evaluates an ordered ladder top-down; the first row whose threshold the
/// count meets wins.
pub fn ladder(count: u32, tiers: &[Tier]) -> Option<&Tier> {
    tiers.iter().find(|t| count >= t.min_count)
}

/// A post-aggregation cap produced by a scorer's override rules.
#[derive(Debug, Clone)]
pub struct ScoreCap {
    pub limit: u32,
    pub reason: String,
}

/// Product of one scorer pass: dimensions in rubric order plus caps.
pub struct ScorerOutcome {
    pub dimensions: Vec<(String, DimensionScore)>,
    pub caps: SmallVec<[ScoreCap; 2]>,
}

impl ScorerOutcome {
    pub fn new() -> Self {
        Self {
            dimensions: Vec::new(),
            caps: SmallVec::new(),
        }
    }

    pub fn push(&mut self, name: &str, dim: DimensionScore) {
        self.dimensions.push((name.to_string(), dim));
    }

    pub fn cap(&mut self, limit: u32, reason: String) {
        self.caps.push(ScoreCap { limit, reason });
    }

    /// Sum of dimension scores before penalties and caps.
    pub fn raw_total(&self) -> u32 {
        self.dimensions.iter().map(|(_, d)| d.score).sum()
    }
}

impl Default for ScorerOutcome {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores every dimension of one document type from normalized text.
pub trait ScorerSet: Send + Sync {
    fn score_all(&self, text: &str) -> ScorerOutcome;
}

/// Caps a list of feedback terms for message readability.
pub(crate) fn term_list(terms: &[String]) -> String {
    const SHOWN: usize = 5;
    if terms.len() <= SHOWN {
        terms.join(", ")
    } else {
        format!(
            "{}, and {} more",
            terms[..SHOWN].join(", "),
            terms.len() - SHOWN
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_picks_the_first_met_threshold() {
        const TIERS: [Tier; 3] = [
            Tier { min_count: 5, points: 25, message: "high" },
            Tier { min_count: 3, points: 16, message: "mid" },
            Tier { min_count: 1, points: 8, message: "low" },
        ];
        assert_eq!(ladder(9, &TIERS).unwrap().points, 25);
        assert_eq!(ladder(5, &TIERS).unwrap().points, 25);
        assert_eq!(ladder(4, &TIERS).unwrap().points, 16);
        assert_eq!(ladder(1, &TIERS).unwrap().points, 8);
        assert!(ladder(0, &TIERS).is_none());
    }

    #[test]
    fn term_list_truncates_politely() {
        let terms: Vec<String> = (1..=7).map(|i| format!("t{i}")).collect();
        assert_eq!(term_list(&terms[..2]), "t1, t2");
        assert_eq!(term_list(&terms), "t1, t2, t3, t4, t5, and 2 more");
    }
}
