use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hb_core::domain::entities::Place;
use hb_core::domain::value_objects::PlaceDetails;

use super::{AmenityResponse, PlaceReviewItem, UserResponse};

/// Body of `POST /places`; `owner` is the owner's id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceCreatedResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: Uuid,
}

impl From<Place> for PlaceCreatedResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: place.owner_id,
        }
    }
}

/// Entry of `GET /places`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceSummary {
    pub id: Uuid,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Place> for PlaceSummary {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            title: place.title,
            latitude: place.latitude,
            longitude: place.longitude,
        }
    }
}

/// Body of `GET /places/{id}` with the owner, reviews and amenities inlined
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetailsResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: UserResponse,
    pub reviews: Vec<PlaceReviewItem>,
    pub amenities: Vec<AmenityResponse>,
}

impl From<PlaceDetails> for PlaceDetailsResponse {
    fn from(details: PlaceDetails) -> Self {
        let PlaceDetails {
            place,
            owner,
            amenities,
            reviews,
        } = details;

        Self {
            id: place.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: owner.into(),
            reviews: reviews.into_iter().map(Into::into).collect(),
            amenities: amenities.into_iter().map(Into::into).collect(),
        }
    }
}
