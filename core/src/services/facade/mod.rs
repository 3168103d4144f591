//! Facade coordinating the entity store, validation and policy.
//!
//! Every mutating operation follows the same order: admin gate (admin
//! operations only), authentication, lookup of referenced entities,
//! authorization, validation, then a single store write. A failure at any
//! step leaves the store untouched.

mod amenities;
mod places;
mod reviews;
mod users;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::value_objects::Actor;
use crate::errors::{DomainError, DomainResult};
use crate::policy::{self, Action};
use crate::repositories::{
    AmenityRepository, InMemoryStore, PlaceRepository, ReviewRepository, UserRepository,
};
use crate::services::password::PasswordHasher;

/// Application facade over the four repositories
pub struct HbnbFacade<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    users: Arc<U>,
    places: Arc<P>,
    amenities: Arc<A>,
    reviews: Arc<R>,
    hasher: PasswordHasher,
}

impl<U, P, A, R> HbnbFacade<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    pub fn new(
        users: Arc<U>,
        places: Arc<P>,
        amenities: Arc<A>,
        reviews: Arc<R>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            places,
            amenities,
            reviews,
            hasher,
        }
    }

    /// User repository shared with the authentication service
    pub fn user_repository(&self) -> Arc<U> {
        Arc::clone(&self.users)
    }

    fn authorize(actor: &Actor, action: Action) -> DomainResult<()> {
        policy::authorize(actor, &action).map_err(|denial| {
            tracing::warn!(?action, actor = ?actor.id(), %denial, "Authorization denied");
            DomainError::from(denial)
        })
    }

    fn require_authenticated(actor: &Actor) -> DomainResult<Uuid> {
        actor.id().ok_or(DomainError::Unauthenticated)
    }
}

impl HbnbFacade<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore> {
    /// Facade with every repository backed by one shared in-memory store
    pub fn in_memory(store: InMemoryStore, hasher: PasswordHasher) -> Self {
        let store = Arc::new(store);
        Self::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
            store,
            hasher,
        )
    }
}
