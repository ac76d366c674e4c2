use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanceError {
    /// A form field is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FinanceError {
    pub fn validation(message: impl Into<String>) -> Self {
        FinanceError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;
