mod dimension;
mod report;
mod rubric;
mod slop;

pub use dimension::DimensionScore;
pub use report::ValidationReport;
pub use rubric::{DimensionSpec, Rubric};
pub use slop::{LexicalSignals, SlopReport, SlopSeverity, StructuralSignals, StylometricSignals};
