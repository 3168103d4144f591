//! Place repository trait, including amenity associations and the
//! cascading delete.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Amenity, Place};
use crate::errors::DomainError;

/// Repository trait for Place entity persistence operations
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError>;

    /// All places in creation order
    async fn list(&self) -> Result<Vec<Place>, DomainError>;

    async fn create(&self, place: Place) -> Result<Place, DomainError>;

    /// Replace a stored place; `Err(DomainError::NotFound)` if absent
    async fn update(&self, place: Place) -> Result<Place, DomainError>;

    /// Delete a place together with its reviews and amenity associations
    ///
    /// Runs as one atomic unit: either everything is removed or nothing is.
    /// Amenities themselves are kept.
    ///
    /// # Returns
    /// * `Ok(true)` - Place and dependents deleted
    /// * `Ok(false)` - Place not found
    async fn delete_cascade(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Append an amenity association; attaching the same amenity twice
    /// records it twice
    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError>;

    /// Amenities attached to a place, in attachment order
    async fn amenities_for(&self, place_id: Uuid) -> Result<Vec<Amenity>, DomainError>;
}
