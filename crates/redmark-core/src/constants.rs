/// Redmark engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Total points available across every rubric.
pub const TOTAL_RUBRIC_POINTS: u32 = 100;

/// Maximum scored input length in characters. Longer input is truncated on
/// a char boundary and the truncation is surfaced as an issue.
pub const MAX_INPUT_CHARS: usize = 200_000;

/// Distinct prompt-signal categories required to classify input as a
/// prompt template rather than a document.
pub const PROMPT_SIGNAL_THRESHOLD: usize = 3;

/// Cap on the lexical slop sub-score.
pub const LEXICAL_SCORE_CAP: u32 = 40;

/// Points per matched slop-lexicon occurrence.
pub const LEXICAL_HIT_WEIGHT: u32 = 2;

/// Cap on the structural slop sub-score.
pub const STRUCTURAL_SCORE_CAP: u32 = 25;

/// Points per structural anti-pattern occurrence.
pub const STRUCTURAL_HIT_WEIGHT: u32 = 5;

/// Cap on the stylometric slop sub-score.
pub const STYLOMETRIC_SCORE_CAP: u32 = 15;

/// Points per tripped stylometric flag.
pub const STYLOMETRIC_FLAG_POINTS: u32 = 5;

/// Minimum sentence count before sentence-length variance is evaluated.
pub const MIN_SENTENCES_FOR_VARIANCE: usize = 8;

/// Sentence-length standard deviation (in words) below which prose is
/// flagged as machine-uniform.
pub const SENTENCE_STDDEV_FLOOR: f64 = 4.0;

/// Window size in words for the type-token ratio.
pub const TTR_WINDOW: usize = 50;

/// Minimum word count before the windowed type-token ratio is evaluated.
pub const MIN_WORDS_FOR_TTR: usize = 100;

/// Mean windowed type-token ratio below which vocabulary is flagged as
/// repetitive.
pub const TTR_FLOOR: f64 = 0.45;

/// Slop severity bucket lower bounds.
pub const SEVERITY_LIGHT_MIN: u32 = 10;
pub const SEVERITY_MODERATE_MIN: u32 = 20;
pub const SEVERITY_HEAVY_MIN: u32 = 35;
pub const SEVERITY_SEVERE_MIN: u32 = 50;

/// Default multiplier applied to the raw slop penalty.
pub const DEFAULT_SLOP_PENALTY_SCALE: f64 = 0.6;

/// Default cap on the scaled slop penalty.
pub const DEFAULT_SLOP_PENALTY_CAP: u32 = 5;
