//! `/users` endpoints

use actix_web::{web, HttpResponse};

use hb_core::domain::value_objects::CreateUserInput;
use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};

use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

use super::{authenticated, decode, parse_id, AppState};

/// Handler for POST /api/v1/users
///
/// Registers a new user. The response never contains the password.
///
/// ## Errors
/// - 400 Bad Request: invalid field or email already registered
pub async fn create_user<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    request: web::Json<CreateUserInput>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.create_user(request.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/users
pub async fn list_users<U, P, A, R>(state: web::Data<AppState<U, P, A, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.list_users().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/users/{user_id}
pub async fn get_user<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let result = match parse_id(&path, "User") {
        Ok(id) => state.facade.get_user(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/users/{user_id}
///
/// Self-service update of first and last name. Requires a bearer token for
/// the same user.
///
/// ## Errors
/// - 400 Bad Request: "You cannot modify email or password" or invalid field
/// - 401 Unauthorized: missing or invalid token
/// - 403 Forbidden: updating another user
/// - 404 Not Found: unknown user
pub async fn update_user<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    auth: OptionalAuth,
    path: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let actor = auth.actor();
    let request = authenticated(&actor)
        .and_then(|()| Ok((parse_id(&path, "User")?, decode(&body)?)));

    let result = match request {
        Ok((id, input)) => state.facade.update_user(&actor, id, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

pub fn configure<U, P, A, R>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user::<U, P, A, R>))
            .route("", web::get().to(list_users::<U, P, A, R>))
            .route("/{user_id}", web::get().to(get_user::<U, P, A, R>))
            .route("/{user_id}", web::put().to(update_user::<U, P, A, R>)),
    );
}
