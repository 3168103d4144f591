//! Repository interfaces for the entity store and the in-memory backend.

pub mod amenity;
pub mod memory;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::AmenityRepository;
pub use memory::InMemoryStore;
pub use place::PlaceRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
