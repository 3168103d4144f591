//! Mapping from domain errors to HTTP responses
//!
//! Every error body has the shape `{"error": "<message>"}`.

use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError,
};
use std::fmt;

use hb_core::errors::{AuthError, DomainError, TokenError};
use hb_shared::types::ErrorResponse;

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";
const INVALID_INPUT_MESSAGE: &str = "Invalid input data";

/// Domain error carried through actix's error machinery
///
/// Extractors and middleware return this; handlers usually call
/// [`handle_domain_error`] directly.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict { .. } => StatusCode::BAD_REQUEST,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Unauthenticated => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::HashingFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(TokenError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures are logged in full and reported with a generic
/// message.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let message = if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
        INTERNAL_ERROR_MESSAGE.to_string()
    } else {
        log::debug!("Request rejected ({}): {}", status.as_u16(), error);
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(message))
}

/// `JsonConfig` error handler: malformed bodies and missing fields become
/// 400 `{"error": "Invalid input data"}`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_INPUT_MESSAGE));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
