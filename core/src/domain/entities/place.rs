//! Place entity: a listing offered by its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rental listing
///
/// `owner_id` is fixed at creation. Amenity associations and reviews are
/// stored separately and joined by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    /// Free text, may be empty
    pub description: String,
    /// Nightly price, strictly positive
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    pub fn new(
        title: String,
        description: String,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the given user owns this place
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
