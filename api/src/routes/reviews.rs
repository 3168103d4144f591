//! `/reviews` endpoints

use actix_web::{web, HttpResponse};

use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_shared::types::MessageResponse;

use crate::dto::{PlaceReviewItem, ReviewCreatedResponse, ReviewSummary};
use crate::handlers::handle_domain_error;
use crate::middleware::auth::OptionalAuth;

use super::{authenticated, decode, parse_id, AppState};

/// Handler for POST /api/v1/reviews
///
/// `user_id` must name the caller.
///
/// ## Errors
/// - 400 Bad Request: empty text or rating outside 1..5
/// - 401 Unauthorized: missing or invalid token
/// - 403 Forbidden: reviewing on behalf of someone else
/// - 404 Not Found: "Invalid place id" or unknown user
pub async fn create_review<U, P, A, R>(
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
        Ok(input) => state.facade.create_review(&actor, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(review) => HttpResponse::Created().json(ReviewCreatedResponse::from(review)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/reviews
pub async fn list_reviews<U, P, A, R>(state: web::Data<AppState<U, P, A, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    match state.facade.list_reviews().await {
        Ok(reviews) => HttpResponse::Ok().json(
            reviews
                .into_iter()
                .map(ReviewSummary::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/reviews/{review_id}
pub async fn get_review<U, P, A, R>(
    state: web::Data<AppState<U, P, A, R>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let result = match parse_id(&path, "Review") {
        Ok(id) => state.facade.get_review(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(review) => HttpResponse::Ok().json(ReviewSummary::from(review)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /api/v1/reviews/{review_id}
///
/// Author or admin only.
pub async fn update_review<U, P, A, R>(
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
        .and_then(|()| Ok((parse_id(&path, "Review")?, decode(&body)?)));

    let result = match request {
        Ok((id, input)) => state.facade.update_review(&actor, id, input).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Review updated successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for DELETE /api/v1/reviews/{review_id}
///
/// Author or admin only.
pub async fn delete_review<U, P, A, R>(
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
    let result = match parse_id(&path, "Review") {
        Ok(id) => state.facade.delete_review(&actor, id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Review deleted successfully")),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /api/v1/reviews/places/{place_id} and
/// GET /api/v1/places/{place_id}/reviews
pub async fn reviews_for_place<U, P, A, R>(
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
        Ok(id) => state.facade.reviews_for_place(id).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(reviews) => HttpResponse::Ok().json(
            reviews
                .into_iter()
                .map(PlaceReviewItem::from)
                .collect::<Vec<_>>(),
        ),
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
        web::scope("/reviews")
            .route("", web::post().to(create_review::<U, P, A, R>))
            .route("", web::get().to(list_reviews::<U, P, A, R>))
            .route(
                "/places/{place_id}",
                web::get().to(reviews_for_place::<U, P, A, R>),
            )
            .route("/{review_id}", web::get().to(get_review::<U, P, A, R>))
            .route("/{review_id}", web::put().to(update_review::<U, P, A, R>))
            .route("/{review_id}", web::delete().to(delete_review::<U, P, A, R>)),
    );
}
