//! `/amenities` endpoints
//!
//! No token required; the admin-gated variants live in [`super::admin`].

use actix_web::{web, HttpResponse};

use hb_core::domain::value_objects::AmenityInput;
use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_shared::types::MessageResponse;

use crate::dto::AmenityResponse;
use crate::handlers::handle_domain_error;

use super::{parse_id, AppState};

/// Handler for POST /api/v1/amenities
pub async fn create_amenity<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    request: web::Json<AmenityInput>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.create_amenity(request.into_inner()).await {
        Ok(amenity) => HttpResponse::Created().json(AmenityResponse::from(amenity)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/amenities
pub async fn list_amenities<U, P, A, R>(state: web::Data<AppState<U, P, A, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.list_amenities().await {
        Ok(amenities) => HttpResponse::Ok().json(
            amenities
                .into_iter()
                .map(AmenityResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/amenities/{amenity_id}
pub async fn get_amenity<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let result = match parse_id(&path, "Amenity") {
        Ok(id) => state.facade.get_amenity(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(amenity) => HttpResponse::Ok().json(AmenityResponse::from(amenity)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/amenities/{amenity_id}
pub async fn update_amenity<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    path: web::Path<String>,
    request: web::Json<AmenityInput>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let result = match parse_id(&path, "Amenity") {
        Ok(id) => state.facade.update_amenity(id, request.into_inner()).await,
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
        web::scope("/amenities")
            .route("", web::post().to(create_amenity::<U, P, A, R>))
            .route("", web::get().to(list_amenities::<U, P, A, R>))
            .route("/{amenity_id}", web::get().to(get_amenity::<U, P, A, R>))
            .route("/{amenity_id}", web::put().to(update_amenity::<U, P, A, R>)),
    );
}
