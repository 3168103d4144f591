//! Typed payloads for every mutating facade operation.
//!
//! Required fields are plain values so a missing field fails at
//! deserialization. Update payloads wrap every field in `Option`; only the
//! supplied ones are validated and applied.

use serde::Deserialize;
use uuid::Uuid;

/// Self-service registration
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Registration performed by an administrator
#[derive(Debug, Clone, Deserialize)]
pub struct AdminCreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `true` when absent
    #[serde(default)]
    pub is_admin: Option<bool>,
}

/// Self-service profile update; email and password are rejected
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile update performed by an administrator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaceInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Declared owner; must be the caller
    #[serde(rename = "owner", alias = "owner_id")]
    pub owner_id: Uuid,
}

/// Place update; the owner cannot be changed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaceInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmenityInput {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewInput {
    pub text: String,
    pub rating: i32,
    /// Declared author; must be the caller
    pub user_id: Uuid,
    pub place_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewInput {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_input_reads_owner_field() {
        let owner = Uuid::new_v4();
        let input: CreatePlaceInput = serde_json::from_value(serde_json::json!({
            "title": "Cozy Apartment",
            "price": 100.0,
            "latitude": 37.77,
            "longitude": -122.41,
            "owner": owner,
        }))
        .unwrap();

        assert_eq!(input.owner_id, owner);
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<CreateUserInput, _> = serde_json::from_value(serde_json::json!({
            "first_name": "John",
            "email": "john@example.com",
            "password": "secret",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_input_ignores_unknown_fields() {
        let input: UpdatePlaceInput = serde_json::from_value(serde_json::json!({
            "title": "New",
            "owner": "someone-else",
        }))
        .unwrap();
        assert_eq!(input.title.as_deref(), Some("New"));
        assert!(input.price.is_none());
    }

    #[test]
    fn test_admin_flag_optional() {
        let input: AdminCreateUserInput = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Admin",
            "email": "ada@example.com",
            "password": "secret",
        }))
        .unwrap();
        assert_eq!(input.is_admin, None);
    }
}
