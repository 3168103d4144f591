//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

use crate::policy::Denial;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing entity; `message` is the full client-facing text
    #[error("{message}")]
    NotFound { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Forbidden(Denial),

    #[error("Missing or invalid authorization token")]
    Unauthenticated,

    #[error("{message}")]
    Conflict { message: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// `"<resource> not found"`
    pub fn not_found(resource: &str) -> Self {
        DomainError::NotFound {
            message: format!("{} not found", resource),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

impl From<Denial> for DomainError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Unauthenticated => DomainError::Unauthenticated,
            other => DomainError::Forbidden(other),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
