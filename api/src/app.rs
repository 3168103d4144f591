//! Application factory
//!
//! Builds the Actix-web application around an [`AppState`]. `main` serves it
//! over MySQL; the integration tests build the same app over the in-memory
//! store.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use std::sync::Arc;

use actix_web::{web, App, Error, HttpResponse};

use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_core::services::TokenResolver;
use hb_shared::config::AppConfig;
use hb_shared::types::{HealthResponse, HealthStatus};

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::{auth::JwtAuth, cors::create_cors, security::SecurityMiddleware};
use crate::routes::{admin, amenities, auth, places, reviews, users, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, P, A, R>(
    app_state: web::Data<AppState<U, P, A, R>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);
    let payload_config = web::PayloadConfig::new(config.server.max_payload_size);
    let resolver: Arc<dyn TokenResolver> = app_state.auth_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::Data::from(resolver))
        .app_data(json_config)
        .app_data(payload_config)
        // Innermost first: the bearer token is resolved once per request,
        // after the path is normalized and before any handler runs
        .wrap(JwtAuth::optional())
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(SecurityMiddleware::for_environment(config.environment))
        .wrap(create_cors(&config.cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check::<U, P, A, R>))
        .service(
            web::scope("/api/v1")
                .configure(auth::configure::<U, P, A, R>)
                .configure(users::configure::<U, P, A, R>)
                .configure(places::configure::<U, P, A, R>)
                .configure(amenities::configure::<U, P, A, R>)
                .configure(reviews::configure::<U, P, A, R>)
                .configure(admin::configure::<U, P, A, R>),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Reports `degraded` when the database answers but not with the expected
/// row, `unhealthy` (503) when it cannot be reached.
async fn health_check<U, P, A, R>(state: web::Data<AppState<U, P, A, R>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    let healthy = HealthResponse::healthy(env!("CARGO_PKG_VERSION"));

    let Some(database) = state.database.as_ref() else {
        return HttpResponse::Ok().json(healthy);
    };

    match database.health_check().await {
        Ok(true) => HttpResponse::Ok().json(healthy),
        Ok(false) => HttpResponse::Ok().json(HealthResponse {
            status: HealthStatus::Degraded,
            ..healthy
        }),
        Err(error) => {
            log::error!("Database health check failed: {}", error);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: HealthStatus::Unhealthy,
                ..healthy
            })
        }
    }
}
