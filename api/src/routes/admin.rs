//! `/admin` endpoints
//!
//! Every handler requires an admin token. The privilege check runs before
//! any lookup or body decoding, so a non-admin gets 403 even for ids that do
//! not exist or payloads that would not parse.

use actix_web::{web, HttpResponse};

use hb_core::policy::Action;
use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_shared::types::MessageResponse;

use crate::dto::{AmenityResponse, UserResponse};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

use super::{decode, gate, parse_id, AppState};

/// Handler for POST /api/v1/admin/users
///
/// Creates a user; `is_admin` defaults to true when omitted.
pub async fn create_user<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    auth: OptionalAuth,
    body: web::Bytes,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let actor = auth.actor();
    let result = match gate(&actor, Action::AdminCreateUser).and_then(|()| decode(&body)) {
        Ok(input) => state.facade.admin_create_user(&actor, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/admin/users/{user_id}
///
/// Any field may change, including email, password and role.
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
    let request = gate(&actor, Action::AdminUpdateUser)
        .and_then(|()| Ok((parse_id(&path, "User")?, decode(&body)?)));

    let result = match request {
        Ok((id, input)) => state.facade.admin_update_user(&actor, id, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/admin/amenities
pub async fn create_amenity<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    auth: OptionalAuth,
    body: web::Bytes,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let actor = auth.actor();
    let result = match gate(&actor, Action::AdminCreateAmenity).and_then(|()| decode(&body)) {
        Ok(input) => state.facade.admin_create_amenity(&actor, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(amenity) => HttpResponse::Created().json(AmenityResponse::from(amenity)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/admin/amenities/{amenity_id}
pub async fn update_amenity<U, P, A, R>(
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
    let request = gate(&actor, Action::AdminUpdateAmenity)
        .and_then(|()| Ok((parse_id(&path, "Amenity")?, decode(&body)?)));

    let result = match request {
        Ok((id, input)) => state.facade.admin_update_amenity(&actor, id, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Amenity updated successfully")),
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
        web::scope("/admin")
            .route("/users", web::post().to(create_user::<U, P, A, R>))
            .route("/users/{user_id}", web::put().to(update_user::<U, P, A, R>))
            .route("/amenities", web::post().to(create_amenity::<U, P, A, R>))
            .route(
                "/amenities/{amenity_id}",
                web::put().to(update_amenity::<U, P, A, R>),
            ),
    );
}
