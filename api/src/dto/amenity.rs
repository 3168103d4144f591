use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hb_core::domain::entities::Amenity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmenityResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name,
        }
    }
}
