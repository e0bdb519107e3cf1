use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("stage name must be a non-empty string")]
    InvalidName,

    #[error("no runtime recorded for stage '{name}'")]
    NotFound { name: String },
}

impl StageError {
    #[inline]
    pub fn not_found(name: impl Into<String>) -> Self {
        StageError::NotFound { name: name.into() }
    }
}
