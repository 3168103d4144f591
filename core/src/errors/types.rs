//! Error types for authentication, token handling and field validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}

/// Validation errors
///
/// Every variant renders as the reason text returned to API clients.
/// `field` carries the `entity.field` key the rule is attached to and
/// `label` the capitalised name used in the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{label} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        label: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{label} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{label} must be positive")]
    NotPositive {
        field: &'static str,
        label: &'static str,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{label} is required")]
    RequiredField {
        field: &'static str,
        label: &'static str,
    },

    #[error("You cannot modify email or password")]
    ImmutableField { field: &'static str },

    #[error("Invalid input data")]
    MalformedPayload,
}

impl ValidationError {
    /// The `entity.field` key this failure is attached to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidLength { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::RequiredField { field, .. }
            | ValidationError::ImmutableField { field } => Some(field),
            ValidationError::InvalidEmail => Some("user.email"),
            ValidationError::MalformedPayload => None,
        }
    }
}
