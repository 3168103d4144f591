//! In-memory entity store.
//!
//! All tables sit behind one `tokio::sync::RwLock`, so every write,
//! including the place cascade, is a single critical section. Cloning the
//! store shares the same tables.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Amenity, Place, Review, User};
use crate::errors::DomainError;

use super::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};


#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    places: Vec<Place>,
    amenities: Vec<Amenity>,
    reviews: Vec<Review>,
    /// (place_id, amenity_id) in attachment order; duplicates allowed
    place_amenities: Vec<(Uuid, Uuid)>,
}

/// Entity store backed by process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &[User], email: &str, except: Option<Uuid>) -> bool {
    users
        .iter()
        .any(|u| u.email == email && Some(u.id) != except)
}

fn replace<T, F>(rows: &mut [T], is_target: F, value: T, resource: &str) -> Result<(), DomainError>
where
    F: Fn(&T) -> bool,
{
    match rows.iter_mut().find(|row| is_target(&**row)) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(DomainError::not_found(resource)),
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if email_taken(&tables.users, &user.email, None) {
            return Err(DomainError::conflict("Email already registered"));
        }

        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        if email_taken(&tables.users, &user.email, Some(user.id)) {
            return Err(DomainError::conflict("Email is already in use"));
        }

        let id = user.id;
        replace(&mut tables.users, |u| u.id == id, user.clone(), "User")?;
        Ok(user)
    }
}

#[async_trait]
impl PlaceRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.places.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Place>, DomainError> {
        Ok(self.tables.read().await.places.clone())
    }

    async fn create(&self, place: Place) -> Result<Place, DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.users.iter().any(|u| u.id == place.owner_id) {
            return Err(DomainError::not_found("Owner"));
        }

        tables.places.push(place.clone());
        Ok(place)
    }

    async fn update(&self, place: Place) -> Result<Place, DomainError> {
        let mut tables = self.tables.write().await;
        let id = place.id;
        replace(&mut tables.places, |p| p.id == id, place.clone(), "Place")?;
        Ok(place)
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;

        let Some(index) = tables.places.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        tables.places.remove(index);
        tables.reviews.retain(|r| r.place_id != id);
        tables.place_amenities.retain(|(place_id, _)| *place_id != id);
        Ok(true)
    }

    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.places.iter().any(|p| p.id == place_id) {
            return Err(DomainError::not_found("Place"));
        }
        if !tables.amenities.iter().any(|a| a.id == amenity_id) {
            return Err(DomainError::not_found("Amenity"));
        }

        tables.place_amenities.push((place_id, amenity_id));
        Ok(())
    }

    async fn amenities_for(&self, place_id: Uuid) -> Result<Vec<Amenity>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .place_amenities
            .iter()
            .filter(|(pid, _)| *pid == place_id)
            .filter_map(|(_, aid)| tables.amenities.iter().find(|a| a.id == *aid).cloned())
            .collect())
    }
}

#[async_trait]
impl AmenityRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.amenities.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Amenity>, DomainError> {
        Ok(self.tables.read().await.amenities.clone())
    }

    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        self.tables.write().await.amenities.push(amenity.clone());
        Ok(amenity)
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let mut tables = self.tables.write().await;
        let id = amenity.id;
        replace(&mut tables.amenities, |a| a.id == id, amenity.clone(), "Amenity")?;
        Ok(amenity)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.reviews.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Review>, DomainError> {
        Ok(self.tables.read().await.reviews.clone())
    }

    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect())
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut tables = self.tables.write().await;

        if !tables.places.iter().any(|p| p.id == review.place_id) {
            return Err(DomainError::not_found("Place"));
        }
        if !tables.users.iter().any(|u| u.id == review.user_id) {
            return Err(DomainError::not_found("User"));
        }

        tables.reviews.push(review.clone());
        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let mut tables = self.tables.write().await;
        let id = review.id;
        replace(&mut tables.reviews, |r| r.id == id, review.clone(), "Review")?;
        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.reviews.len();
        tables.reviews.retain(|r| r.id != id);
        Ok(tables.reviews.len() != before)
    }
}
