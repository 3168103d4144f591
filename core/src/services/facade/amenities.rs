//! Amenity use cases

use uuid::Uuid;

use crate::domain::entities::Amenity;
use crate::domain::value_objects::{Actor, AmenityInput};
use crate::errors::{DomainError, DomainResult};
use crate::policy::Action;
use crate::repositories::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
use crate::validation::Validate;

use super::HbnbFacade;

impl<U, P, A, R> HbnbFacade<U, P, A, R>
where
    U: UserRepository,
    P: PlaceRepository,
    A: AmenityRepository,
    R: ReviewRepository,
{
    pub async fn create_amenity(&self, input: AmenityInput) -> DomainResult<Amenity> {
        input.validate()?;

        let amenity = self.amenities.create(Amenity::new(input.name)).await?;
        tracing::info!(amenity_id = %amenity.id, "Amenity created");
        Ok(amenity)
    }

    pub async fn get_amenity(&self, id: Uuid) -> DomainResult<Amenity> {
        self.amenities
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Amenity"))
    }

    pub async fn list_amenities(&self) -> DomainResult<Vec<Amenity>> {
        self.amenities.list().await
    }

    pub async fn update_amenity(&self, id: Uuid, input: AmenityInput) -> DomainResult<Amenity> {
        let mut amenity = self.get_amenity(id).await?;
        input.validate()?;

        amenity.name = input.name;
        amenity.touch();

        let amenity = self.amenities.update(amenity).await?;
        tracing::info!(amenity_id = %amenity.id, "Amenity updated");
        Ok(amenity)
    }

    pub async fn admin_create_amenity(
        &self,
        actor: &Actor,
        input: AmenityInput,
    ) -> DomainResult<Amenity> {
        Self::authorize(actor, Action::AdminCreateAmenity)?;
        self.create_amenity(input).await
    }

    pub async fn admin_update_amenity(
        &self,
        actor: &Actor,
        id: Uuid,
        input: AmenityInput,
    ) -> DomainResult<Amenity> {
        Self::authorize(actor, Action::AdminUpdateAmenity)?;
        self.update_amenity(id, input).await
    }
}
