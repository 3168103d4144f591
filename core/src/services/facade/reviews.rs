//! Review use cases

use uuid::Uuid;

use crate::domain::entities::Review;
use crate::domain::value_objects::{Actor, CreateReviewInput, UpdateReviewInput};
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
    /// Review a place as the declared author
    pub async fn create_review(
        &self,
        actor: &Actor,
        input: CreateReviewInput,
    ) -> DomainResult<Review> {
        Self::require_authenticated(actor)?;
        let place = self
            .places
            .find_by_id(input.place_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                message: "Invalid place id".to_string(),
            })?;
        let author = self.get_user(input.user_id).await?;
        Self::authorize(
            actor,
            Action::CreateReview {
                declared_author: author.id,
            },
        )?;
        input.validate()?;

        let review = Review::new(input.text, input.rating, author.id, place.id);
        let review = self.reviews.create(review).await?;
        tracing::info!(review_id = %review.id, place_id = %place.id, "Review created");
        Ok(review)
    }

    pub async fn get_review(&self, id: Uuid) -> DomainResult<Review> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review"))
    }

    pub async fn list_reviews(&self) -> DomainResult<Vec<Review>> {
        self.reviews.list().await
    }

    /// Reviews of a place in creation order
    pub async fn reviews_for_place(&self, place_id: Uuid) -> DomainResult<Vec<Review>> {
        let place = self.find_place(place_id).await?;
        self.reviews.find_by_place(place.id).await
    }

    /// Update a review as its author or an admin
    pub async fn update_review(
        &self,
        actor: &Actor,
        id: Uuid,
        input: UpdateReviewInput,
    ) -> DomainResult<Review> {
        Self::require_authenticated(actor)?;
        let mut review = self.get_review(id).await?;
        Self::authorize(
            actor,
            Action::UpdateReview {
                author: review.user_id,
            },
        )?;
        input.validate()?;

        if let Some(text) = input.text {
            review.text = text;
        }
        if let Some(rating) = input.rating {
            review.rating = rating;
        }
        review.touch();

        let review = self.reviews.update(review).await?;
        tracing::info!(review_id = %review.id, "Review updated");
        Ok(review)
    }

    /// Delete a review as its author or an admin
    pub async fn delete_review(&self, actor: &Actor, id: Uuid) -> DomainResult<()> {
        Self::require_authenticated(actor)?;
        let review = self.get_review(id).await?;
        Self::authorize(
            actor,
            Action::DeleteReview {
                author: review.user_id,
            },
        )?;

        if !self.reviews.delete(review.id).await? {
            return Err(DomainError::not_found("Review"));
        }
        tracing::info!(review_id = %review.id, "Review deleted");
        Ok(())
    }
}
