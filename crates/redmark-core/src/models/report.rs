use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{DimensionScore, Rubric, SlopReport};

/// Full scoring outcome for one document.
///
/// Invariant: `0 <= total_score <= 100`, and every rubric dimension is
/// present in `dimensions` regardless of how scoring short-circuited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub doc_type: String,
    pub total_score: u32,
    pub dimensions: BTreeMap<String, DimensionScore>,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
    pub slop: SlopReport,
    pub prompt_detected: bool,
}

impl ValidationReport {
    /// Zero-score report shaped exactly like a normal result for `rubric`.
    ///
    /// Used for empty input and for prompt-shaped input, so callers always
    /// see the same dimension set.
    pub fn zeroed(doc_type: &str, rubric: &Rubric) -> Self {
        let dimensions = rubric
            .dimensions
            .iter()
            .map(|d| (d.name.clone(), DimensionScore::zero(d.max_score)))
            .collect();
        Self {
            doc_type: doc_type.to_string(),
            total_score: 0,
            dimensions,
            issues: Vec::new(),
            strengths: Vec::new(),
            slop: SlopReport::empty(),
            prompt_detected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_report_carries_every_dimension() {
        let rubric = Rubric::from_pairs(&[("structure", 25), ("clarity", 20), ("evidence", 25)]);
        let report = ValidationReport::zeroed("one-pager", &rubric);

        assert_eq!(report.total_score, 0);
        assert_eq!(report.dimensions.len(), 3);
        assert_eq!(report.dimensions["structure"].max_score, 25);
        assert_eq!(report.dimensions["structure"].score, 0);
        assert!(!report.prompt_detected);
    }

    #[test]
    fn report_round_trips_through_json() {
        let rubric = Rubric::from_pairs(&[("structure", 50), ("clarity", 50)]);
        let report = ValidationReport::zeroed("one-pager", &rubric);

        let json = serde_json::to_string(&report).unwrap();
        let back: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
