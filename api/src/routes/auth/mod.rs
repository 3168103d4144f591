//! Authentication route handlers
//!
//! - Login with email and password
//! - A protected endpoint that echoes the caller's id

pub mod login;
pub mod protected;

use actix_web::web;

use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};

use crate::middleware::auth::JwtAuth;

pub fn configure<U, P, A, R>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    P: PlaceRepository + 'static,
    A: AmenityRepository + 'static,
    R: ReviewRepository + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login::login::<U, P, A, R>))
            .route(
                "/protected",
                web::get()
                    .to(protected::protected)
                    .wrap(JwtAuth::required()),
            ),
    );
}
