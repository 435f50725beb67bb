//! Error type shared by the restaurant, visitor and review services.

use thiserror::Error;

use crate::lock::LockError;
use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input. Not retried.
    #[error("{0}")]
    Validation(String),
    /// A referenced restaurant, visitor or review does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Store failure, passed through untouched.
    #[error("store error: {0}")]
    Store(#[from] ModelError),
    #[error("lock error: {0}")]
    Lock(#[from] LockError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ServiceError::NotFound(message.into())
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Store(_) => 500,
            ServiceError::Lock(_) => 500,
        }
    }
}
