//! # redmark-core
//!
//! Foundation crate for the Redmark document scoring engine.
//! Defines output models, errors, config, constants, and markdown
//! normalization. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod normalize;

// Re-export the most commonly used types at the crate root.
pub use config::{EngineConfig, SlopPenaltyPolicy, StylometricConfig};
pub use errors::{EngineError, EngineResult, PatternError, RegistryError};
pub use models::{
    DimensionScore, DimensionSpec, LexicalSignals, Rubric, SlopReport, SlopSeverity,
    StructuralSignals, StylometricSignals, ValidationReport,
};
