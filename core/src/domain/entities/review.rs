//! Review entity: a rated comment left by a user on a place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A review of a place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    /// Integer score from 1 to 5
    pub rating: i32,
    /// Author of the review
    pub user_id: Uuid,
    /// Reviewed place
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(text: String, rating: i32, user_id: Uuid, place_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text,
            rating,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the given user wrote this review
    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
