//! Review projections
//!
//! The three shapes differ on purpose: creation echoes both references,
//! listings show only the text and rating, and a place's reviews name the
//! author.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hb_core::domain::entities::Review;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewCreatedResponse {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub place_id: Uuid,
    pub user_id: Uuid,
}

impl From<Review> for ReviewCreatedResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            text: review.text,
            rating: review.rating,
            place_id: review.place_id,
            user_id: review.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
}

impl From<Review> for ReviewSummary {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            text: review.text,
            rating: review.rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceReviewItem {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
}

impl From<Review> for PlaceReviewItem {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            text: review.text,
            rating: review.rating,
            user_id: review.user_id,
        }
    }
}
