use actix_web::{web, HttpResponse};
use validator::Validate;

use hb_core::errors::{DomainError, ValidationError};
use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};

use crate::dto::LoginRequest;
use crate::handlers::handle_domain_error;

use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Exchanges an email and password for a bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "john.doe@example.com",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "token_type": "Bearer",
///     "expires_in": 3600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email or empty password
/// - 401 Unauthorized: "Invalid credentials"
pub async fn login<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    if let Err(errors) = request.validate() {
        log::debug!("Rejected login payload: {}", errors);
        return handle_domain_error(&DomainError::from(ValidationError::MalformedPayload));
    }

    match state
        .auth_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(error) => handle_domain_error(&error),
    }
}
