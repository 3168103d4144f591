//! Route handlers
//!
//! Handlers are generic over the four repository types so the same routes
//! serve the MySQL store in production and the in-memory store in tests.

pub mod admin;
pub mod amenities;
pub mod auth;
pub mod places;
pub mod reviews;
pub mod users;

use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use hb_core::domain::value_objects::Actor;
use hb_core::errors::{DomainError, ValidationError};
use hb_core::policy::{authorize, Action};
use hb_core::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use hb_core::services::{AuthService, HbnbFacade};
use hb_infra::database::DatabasePool;

/// Application state that holds shared services
pub struct AppState<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    pub facade: Arc<HbnbFacade<U, P, A, R>>,
    pub auth_service: Arc<AuthService<U>>,
    /// Present when backed by MySQL; probed by `/health`
    pub database: Option<DatabasePool>,
}

impl<U, P, A, R> AppState<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    pub fn new(facade: Arc<HbnbFacade<U, P, A, R>>, auth_service: Arc<AuthService<U>>) -> Self {
        Self {
            facade,
            auth_service,
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}

/// Parse a path id; a malformed id cannot name an existing resource
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::not_found(resource))
}

/// Reject anonymous callers
pub(crate) fn authenticated(actor: &Actor) -> Result<(), DomainError> {
    match actor {
        Actor::Anonymous => Err(DomainError::Unauthenticated),
        Actor::User { .. } => Ok(()),
    }
}

/// Privilege check for admin-only operations
pub(crate) fn gate(actor: &Actor, action: Action) -> Result<(), DomainError> {
    authorize(actor, &action).map_err(DomainError::from)
}

/// Decode a JSON request body
///
/// Token-gated handlers take the raw body and call this after their gates,
/// so a caller without rights never learns whether the payload was valid.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DomainError> {
    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejected JSON payload: {}", e);
        DomainError::from(ValidationError::MalformedPayload)
    })
}
