//! A place joined with everything shown on its detail page.

use serde::Serialize;

use crate::domain::entities::{Amenity, Place, Review, User};

#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetails {
    pub place: Place,
    pub owner: User,
    /// Associated amenities in attachment order; may repeat
    pub amenities: Vec<Amenity>,
    /// Reviews in creation order
    pub reviews: Vec<Review>,
}
