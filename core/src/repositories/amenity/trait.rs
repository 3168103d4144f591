//! Amenity repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Amenity;
use crate::errors::DomainError;

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError>;

    async fn list(&self) -> Result<Vec<Amenity>, DomainError>;

    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError>;

    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError>;
}
