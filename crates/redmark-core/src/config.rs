use serde::{Deserialize, Serialize};

use crate::constants;

/// Engine-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum scored input length in characters.
    pub max_input_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: constants::MAX_INPUT_CHARS,
        }
    }
}

/// Per-document-type scaling of the raw slop penalty.
///
/// The slop analyzer derives a raw penalty from its threshold ladder; each
/// document type then scales it with `min(cap, floor(raw * scale))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SlopPenaltyPolicy {
    /// Multiplier applied to the raw ladder penalty.
    pub scale: f64,
    /// Upper bound on the scaled penalty.
    pub cap: u32,
}

impl Default for SlopPenaltyPolicy {
    fn default() -> Self {
        Self {
            scale: constants::DEFAULT_SLOP_PENALTY_SCALE,
            cap: constants::DEFAULT_SLOP_PENALTY_CAP,
        }
    }
}

impl SlopPenaltyPolicy {
    /// Scaled penalty actually subtracted from a total score.
    pub fn apply(&self, raw: u32) -> u32 {
        let scaled = (raw as f64 * self.scale).floor() as u32;
        scaled.min(self.cap)
    }
}

/// Floors and minimum sample sizes for the stylometric flags.
///
/// Inputs below the minimum sample sizes are exempt from the corresponding
/// flag; short text carries too little signal to judge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StylometricConfig {
    /// Minimum sentence count before variance is evaluated.
    pub min_sentences: usize,
    /// Sentence-length standard deviation floor, in words.
    pub sentence_stddev_floor: f64,
    /// Type-token ratio window size, in words.
    pub ttr_window: usize,
    /// Minimum word count before the type-token ratio is evaluated.
    pub min_words: usize,
    /// Mean windowed type-token ratio floor.
    pub ttr_floor: f64,
}

impl Default for StylometricConfig {
    fn default() -> Self {
        Self {
            min_sentences: constants::MIN_SENTENCES_FOR_VARIANCE,
            sentence_stddev_floor: constants::SENTENCE_STDDEV_FLOOR,
            ttr_window: constants::TTR_WINDOW,
            min_words: constants::MIN_WORDS_FOR_TTR,
            ttr_floor: constants::TTR_FLOOR,
        }
    }
}
