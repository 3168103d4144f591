//! Value objects representing immutable domain concepts.

pub mod actor;
pub mod auth_response;
pub mod inputs;
pub mod place_details;

// Re-export commonly used types
pub use actor::Actor;
pub use auth_response::AuthResponse;
pub use inputs::{
    AdminCreateUserInput, AdminUpdateUserInput, AmenityInput, CreatePlaceInput,
    CreateReviewInput, CreateUserInput, UpdatePlaceInput, UpdateReviewInput, UpdateUserInput,
};
pub use place_details::PlaceDetails;
