//! Request and response bodies of the HTTP API
//!
//! Create and update payloads deserialize straight into the `hb_core`
//! input types; this module holds what the API adds on top: the login
//! request and the response projections that decide which fields leave
//! the server.

pub mod amenity;
pub mod auth;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::AmenityResponse;
pub use auth::{LoginRequest, ProtectedResponse};
pub use place::{PlaceCreatedResponse, PlaceDetailsResponse, PlaceSummary};
pub use review::{PlaceReviewItem, ReviewCreatedResponse, ReviewSummary};
pub use user::UserResponse;
