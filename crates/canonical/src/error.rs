use thiserror::Error;

/// Errors that can occur while building a [`Document`](crate::Document).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("document requires a non-empty label")]
    MissingLabel,
    #[error("input text is empty")]
    EmptyInput,
}
