use thiserror::Error;

/// Errors raised while preparing the input of a hash function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Text input could not be normalized into a byte sequence.
    #[error("input text cannot be encoded: {0}")]
    Encoding(String),

    /// The name does not denote one of the supported hash algorithms.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, HashError>;
