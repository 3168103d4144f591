//! Review repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Review;
use crate::errors::DomainError;

/// Repository trait for Review entity persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// All reviews in creation order
    async fn list(&self) -> Result<Vec<Review>, DomainError>;

    /// Reviews of one place in creation order
    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError>;

    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    async fn update(&self, review: Review) -> Result<Review, DomainError>;

    /// # Returns
    /// * `Ok(true)` - Review deleted
    /// * `Ok(false)` - Review not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
