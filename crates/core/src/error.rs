use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Unavailable optional signals (load average, temperatures, CPU times) are
/// not errors — they surface as `None` in the data model. Only a failed
/// mandatory read, bad user input, or a failed export lands here.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("metrics provider error: {0}")]
    Provider(String),

    #[error("no usage samples recorded yet")]
    EmptyHistory,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("serialization error: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T, E = ScopeError> = std::result::Result<T, E>;
