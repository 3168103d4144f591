//! `/places` endpoints

use actix_web::{web, HttpResponse};

use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_shared::types::MessageResponse;

use crate::dto::{PlaceCreatedResponse, PlaceDetailsResponse, PlaceSummary};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

use super::{authenticated, decode, parse_id, reviews, AppState};

/// Handler for POST /api/v1/places
///
/// The `owner` field must name the caller.
///
/// ## Errors
/// - 400 Bad Request: invalid title, price or coordinates
/// - 401 Unauthorized: missing or invalid token
/// - 403 Forbidden: `owner` is someone else
/// - 404 Not Found: "Owner not found"
pub async fn create_place<U, P, A, R>(
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
    let result = match authenticated(&actor).and_then(|()| decode(&body)) {
        Ok(input) => state.facade.create_place(&actor, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(place) => HttpResponse::Created().json(PlaceCreatedResponse::from(place)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/places
pub async fn list_places<U, P, A, R>(state: web::Data<AppState<U, P, A, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.list_places().await {
        Ok(places) => HttpResponse::Ok().json(
            places
                .into_iter()
                .map(PlaceSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/places/{place_id}
///
/// Returns the place with its owner, reviews and amenities inlined.
pub async fn get_place<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let result = match parse_id(&path, "Place") {
        Ok(id) => state.facade.get_place(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(details) => HttpResponse::Ok().json(PlaceDetailsResponse::from(details)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/places/{place_id}
///
/// Owner or admin only. Only the supplied fields change.
pub async fn update_place<U, P, A, R>(
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
        .and_then(|()| Ok((parse_id(&path, "Place")?, decode(&body)?)));

    let result = match request {
        Ok((id, input)) => state.facade.update_place(&actor, id, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Place updated successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/places/{place_id}
///
/// Owner or admin only. Removes the place's reviews and amenity
/// associations along with it.
pub async fn delete_place<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    auth: OptionalAuth,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let actor = auth.actor();
    let result = match parse_id(&path, "Place") {
        Ok(id) => state.facade.delete_place(&actor, id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Place deleted successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /api/v1/places/{place_id}/add_amenity/{amenity_id}
///
/// Owner only; admins get no bypass here. Attaching the same amenity twice
/// lists it twice.
pub async fn add_amenity<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    auth: OptionalAuth,
    path: web::Path<(String, String)>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let actor = auth.actor();
    let (place_id, amenity_id) = path.into_inner();

    let result = match (parse_id(&place_id, "Place"), parse_id(&amenity_id, "Amenity")) {
        (Ok(place_id), Ok(amenity_id)) => {
            state
                .facade
                .attach_amenity(&actor, place_id, amenity_id)
                .await
        }
        (Err(error), _) | (_, Err(error)) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Add amenity to place")),
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
        web::scope("/places")
            .route("", web::post().to(create_place::<U, P, A, R>))
            .route("", web::get().to(list_places::<U, P, A, R>))
            .route("/{place_id}", web::get().to(get_place::<U, P, A, R>))
            .route("/{place_id}", web::put().to(update_place::<U, P, A, R>))
            .route("/{place_id}", web::delete().to(delete_place::<U, P, A, R>))
            .route(
                "/{place_id}/reviews",
                web::get().to(reviews::reviews_for_place::<U, P, A, R>),
            )
            .route(
                "/{place_id}/add_amenity/{amenity_id}",
                web::post().to(add_amenity::<U, P, A, R>),
            ),
    );
}
