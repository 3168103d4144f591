//! # HBnB Core
//!
//! Core business logic and domain layer for the HBnB backend.
//! This crate contains domain entities, validation rules, the authorization
//! policy, repository interfaces with an in-memory store, business services
//! and the error types that form the foundation of the application.

pub mod domain;
pub mod errors;
pub mod policy;
pub mod repositories;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::entities::{Amenity, Claims, Place, Review, User};
pub use domain::value_objects::*;
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use policy::{authorize, Action, Denial};
pub use repositories::{
    AmenityRepository, InMemoryStore, PlaceRepository, ReviewRepository, UserRepository,
};
pub use services::{
    AuthService, HbnbFacade, PasswordHasher, TokenResolver, TokenService, TokenServiceConfig,
};
pub use validation::Validate;
