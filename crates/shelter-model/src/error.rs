use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("surrogate key must be positive, got {0}")]
    NonPositiveKey(i64),
    #[error("surrogate key {0} exceeds the supported range")]
    KeyOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ModelError>;
