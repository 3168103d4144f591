//! Domain entities representing core business objects.

pub mod amenity;
pub mod place;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use amenity::Amenity;
pub use place::Place;
pub use review::Review;
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
pub use user::User;
