//! # redmark-engine
//!
//! Scoring pipeline for structured business documents: detectors,
//! dimension scorers, slop analysis, and the plugin registry behind
//! [`ScoringEngine`].
//!
//! - `patterns`: phrase sets, the slop lexicon, and TOML-loaded rules
//! - `detect`: pure text detectors shared by the scorers
//! - `score`: per-document-type dimension scorers
//! - `slop`: generic-text analysis and the score penalty
//! - `registry`: document types keyed by id
//! - `engine`: the validation pipeline

pub mod detect;
pub mod engine;
pub mod patterns;
pub mod registry;
pub mod score;
pub mod slop;

pub use engine::ScoringEngine;
pub use patterns::toml::TomlPatternLoader;
pub use patterns::{PatternRule, PhraseSet};
pub use registry::{DocumentPlugin, RubricRegistry};
pub use score::{ScoreCap, ScorerOutcome, ScorerSet, Tier};
pub use slop::SlopAnalyzer;
