mod pattern_error;
mod registry_error;

pub use pattern_error::PatternError;
pub use registry_error::RegistryError;

/// Umbrella error for engine operations.
///
/// Configuration problems (bad patterns, duplicate registrations) surface
/// at startup. The only per-call variant is `UnknownDocumentType`; content
/// conditions such as empty input or prompt-shaped text are reported as
/// data, never as errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("unknown document type `{id}`")]
    UnknownDocumentType { id: String },
}

/// Convenience alias used across the workspace.
pub type EngineResult<T> = Result<T, EngineError>;
