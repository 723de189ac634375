/// Pattern compilation and loading errors. Raised at startup only.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern `{id}`: {reason}")]
    InvalidPattern { id: String, reason: String },

    #[error("pattern `{id}` failed to compile: {reason}")]
    CompileFailed { id: String, reason: String },

    #[error("unknown pattern category `{category}` for pattern `{id}`")]
    UnknownCategory { id: String, category: String },

    #[error("pattern file is not valid TOML: {reason}")]
    ParseFailed { reason: String },

    #[error("failed to read pattern file `{path}`: {reason}")]
    FileRead { path: String, reason: String },

    #[error("phrase set `{name}` is empty")]
    EmptyPhraseSet { name: String },
}
