//! Slop analysis: lexical, structural, and stylometric signals combined
//! into a severity bucket and a bounded score penalty.

pub mod lexical;
pub mod penalty;
pub mod structural;
pub mod stylometric;

pub use lexical::analyze_lexical;
pub use penalty::raw_penalty;
pub use structural::analyze_structural;
pub use stylometric::analyze_stylometric;

use redmark_core::config::{SlopPenaltyPolicy, StylometricConfig};
use redmark_core::models::{SlopReport, SlopSeverity};

use crate::patterns::PatternRule;

/// Combined analyzer. Holds the stylometric thresholds and any
/// operator-supplied lexical patterns.
pub struct SlopAnalyzer {
    stylometric: StylometricConfig,
    extra_rules: Vec<PatternRule>,
}

impl SlopAnalyzer {
    pub fn new() -> Self {
        Self {
            stylometric: StylometricConfig::default(),
            extra_rules: Vec::new(),
        }
    }

    pub fn with_stylometric(mut self, cfg: StylometricConfig) -> Self {
        self.stylometric = cfg;
        self
    }

    /// Adds operator-supplied lexical patterns, e.g. loaded from TOML.
    pub fn with_rules(mut self, rules: Vec<PatternRule>) -> Self {
        self.extra_rules.extend(rules);
        self
    }

    /// Full analysis of normalized text. Empty input is clean by
    /// definition.
    pub fn analyze(&self, text: &str, policy: &SlopPenaltyPolicy) -> SlopReport {
        if text.trim().is_empty() {
            return SlopReport::empty();
        }
        let lexical = analyze_lexical(text, &self.extra_rules);
        let structural = analyze_structural(text);
        let stylometric = analyze_stylometric(text, &self.stylometric);

        let score = lexical.score + structural.score + stylometric.score;
        let penalty = policy.apply(raw_penalty(score, lexical.pattern_hits));

        SlopReport {
            score,
            severity: SlopSeverity::from_score(score),
            lexical,
            structural,
            stylometric,
            penalty,
        }
    }
}

impl Default for SlopAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_clean() {
        let report = SlopAnalyzer::new().analyze("  \n ", &SlopPenaltyPolicy::default());
        assert_eq!(report, SlopReport::empty());
    }

    #[test]
    fn clean_prose_draws_no_penalty() {
        let report = SlopAnalyzer::new().analyze(
            "Churn fell from 3.4% to 2.6% after the checklist shipped.",
            &SlopPenaltyPolicy::default(),
        );
        assert_eq!(report.severity, SlopSeverity::Clean);
        assert_eq!(report.score, 0);
        assert_eq!(report.penalty, 0);
    }

    #[test]
    fn lexical_and_stylometric_signals_sum() {
        let text = "Furthermore, we truly delve into the transformative tapestry. ".repeat(12);
        let report = SlopAnalyzer::new().analyze(&text, &SlopPenaltyPolicy::default());
        // Lexical caps at 40; twelve identical sentences add the uniform
        // length flag.
        assert_eq!(report.lexical.score, 40);
        assert_eq!(report.stylometric.score, 5);
        assert_eq!(report.score, 45);
        assert_eq!(report.severity, SlopSeverity::Heavy);
        // Raw penalty 6, scaled by the default 0.6.
        assert_eq!(report.penalty, 3);
    }

    #[test]
    fn zero_scale_policy_disables_the_penalty() {
        let policy = SlopPenaltyPolicy { scale: 0.0, cap: 5 };
        let text = "Furthermore, we truly delve into the transformative tapestry. ".repeat(12);
        let report = SlopAnalyzer::new().analyze(&text, &policy);
        assert_eq!(report.severity, SlopSeverity::Heavy);
        assert_eq!(report.penalty, 0);
    }
}
