use serde::{Deserialize, Serialize};

use crate::constants;

/// Severity bucket for a total slop score.
///
/// Ordered from least to most severe so bucket comparisons work with `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopSeverity {
    Clean,
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl SlopSeverity {
    /// Buckets a total slop score by the fixed thresholds.
    pub fn from_score(score: u32) -> Self {
        if score >= constants::SEVERITY_SEVERE_MIN {
            Self::Severe
        } else if score >= constants::SEVERITY_HEAVY_MIN {
            Self::Heavy
        } else if score >= constants::SEVERITY_MODERATE_MIN {
            Self::Moderate
        } else if score >= constants::SEVERITY_LIGHT_MIN {
            Self::Light
        } else {
            Self::Clean
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
            Self::Severe => "severe",
        }
    }
}

/// Lexical signal breakdown: slop-lexicon hits plus em-dash density.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalSignals {
    pub score: u32,
    pub pattern_hits: u32,
    pub em_dashes: u32,
    /// Most frequent matched phrases, highest count first.
    pub top_patterns: Vec<String>,
}

/// Structural signal breakdown: document-level anti-pattern count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSignals {
    pub score: u32,
    pub anti_patterns: u32,
    pub indicators: Vec<String>,
}

/// Stylometric signal breakdown: distribution-shape flags.
///
/// Measures are `None` when the input is below the minimum sample size for
/// that flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylometricSignals {
    pub score: u32,
    pub sentence_stddev: Option<f64>,
    pub uniform_sentences: bool,
    pub mean_ttr: Option<f64>,
    pub repetitive_vocabulary: bool,
}

/// Combined slop analysis attached to every validation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopReport {
    pub score: u32,
    pub severity: SlopSeverity,
    pub lexical: LexicalSignals,
    pub structural: StructuralSignals,
    pub stylometric: StylometricSignals,
    /// Penalty subtracted from the total score, after per-type scaling.
    pub penalty: u32,
}

impl SlopReport {
    /// Report for input with nothing to analyze.
    pub fn empty() -> Self {
        Self {
            score: 0,
            severity: SlopSeverity::Clean,
            lexical: LexicalSignals::default(),
            structural: StructuralSignals::default(),
            stylometric: StylometricSignals::default(),
            penalty: 0,
        }
    }
}

impl Default for SlopReport {
    fn default() -> Self {
        Self::empty()
    }
}
