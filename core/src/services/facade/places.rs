//! Place use cases, including amenity attachment and the cascading delete

use uuid::Uuid;

use crate::domain::entities::Place;
use crate::domain::value_objects::{Actor, CreatePlaceInput, PlaceDetails, UpdatePlaceInput};
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
    /// Create a place owned by the caller
    pub async fn create_place(&self, actor: &Actor, input: CreatePlaceInput) -> DomainResult<Place> {
        Self::require_authenticated(actor)?;
        let owner = self
            .users
            .find_by_id(input.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Owner"))?;
        Self::authorize(
            actor,
            Action::CreatePlace {
                declared_owner: owner.id,
            },
        )?;
        input.validate()?;

        let place = Place::new(
            input.title,
            input.description,
            input.price,
            input.latitude,
            input.longitude,
            owner.id,
        );

        let place = self.places.create(place).await?;
        tracing::info!(place_id = %place.id, owner_id = %place.owner_id, "Place created");
        Ok(place)
    }

    /// A place with its owner, amenities and reviews
    pub async fn get_place(&self, id: Uuid) -> DomainResult<PlaceDetails> {
        let place = self.find_place(id).await?;
        let owner = self
            .users
            .find_by_id(place.owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Owner"))?;
        let amenities = self.places.amenities_for(place.id).await?;
        let reviews = self.reviews.find_by_place(place.id).await?;

        Ok(PlaceDetails {
            place,
            owner,
            amenities,
            reviews,
        })
    }

    pub async fn list_places(&self) -> DomainResult<Vec<Place>> {
        self.places.list().await
    }

    /// Update a place as its owner or an admin
    pub async fn update_place(
        &self,
        actor: &Actor,
        id: Uuid,
        input: UpdatePlaceInput,
    ) -> DomainResult<Place> {
        Self::require_authenticated(actor)?;
        let mut place = self.find_place(id).await?;
        Self::authorize(
            actor,
            Action::UpdatePlace {
                owner: place.owner_id,
            },
        )?;
        input.validate()?;

        if let Some(title) = input.title {
            place.title = title;
        }
        if let Some(description) = input.description {
            place.description = description;
        }
        if let Some(price) = input.price {
            place.price = price;
        }
        if let Some(latitude) = input.latitude {
            place.latitude = latitude;
        }
        if let Some(longitude) = input.longitude {
            place.longitude = longitude;
        }
        place.touch();

        let place = self.places.update(place).await?;
        tracing::info!(place_id = %place.id, "Place updated");
        Ok(place)
    }

    /// Delete a place with its reviews and amenity associations
    pub async fn delete_place(&self, actor: &Actor, id: Uuid) -> DomainResult<()> {
        Self::require_authenticated(actor)?;
        let place = self.find_place(id).await?;
        Self::authorize(
            actor,
            Action::DeletePlace {
                owner: place.owner_id,
            },
        )?;

        if !self.places.delete_cascade(place.id).await? {
            return Err(DomainError::not_found("Place"));
        }
        tracing::info!(place_id = %place.id, "Place deleted");
        Ok(())
    }

    /// Attach an amenity to a place; only the owner may do this
    pub async fn attach_amenity(
        &self,
        actor: &Actor,
        place_id: Uuid,
        amenity_id: Uuid,
    ) -> DomainResult<()> {
        Self::require_authenticated(actor)?;
        let place = self.find_place(place_id).await?;
        Self::authorize(
            actor,
            Action::AttachAmenity {
                owner: place.owner_id,
            },
        )?;
        let amenity = self.get_amenity(amenity_id).await?;

        self.places.add_amenity(place.id, amenity.id).await?;
        tracing::info!(place_id = %place.id, amenity_id = %amenity.id, "Amenity attached");
        Ok(())
    }

    pub(super) async fn find_place(&self, id: Uuid) -> DomainResult<Place> {
        self.places
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Place"))
    }
}
