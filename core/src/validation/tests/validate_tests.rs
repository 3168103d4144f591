//! Unit tests for payload-level validation

use uuid::Uuid;

use crate::domain::value_objects::{
    CreatePlaceInput, CreateUserInput, UpdatePlaceInput, UpdateReviewInput, UpdateUserInput,
};
use crate::errors::ValidationError;
use crate::validation::Validate;

fn user_input() -> CreateUserInput {
    CreateUserInput {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        password: "secret".to_string(),
    }
}

fn place_input() -> CreatePlaceInput {
    CreatePlaceInput {
        title: "Cozy Apartment".to_string(),
        description: "A nice place to stay".to_string(),
        price: 100.0,
        latitude: 37.7749,
        longitude: -122.4194,
        owner_id: Uuid::new_v4(),
    }
}

#[test]
fn test_valid_create_inputs() {
    assert!(user_input().validate().is_ok());
    assert!(place_input().validate().is_ok());
}

#[test]
fn test_first_failure_wins() {
    let input = CreateUserInput {
        first_name: String::new(),
        email: "bad".to_string(),
        ..user_input()
    };
    let err = input.validate().unwrap_err();
    assert_eq!(err.field(), Some("user.first_name"));
}

#[test]
fn test_create_place_rejects_bad_latitude() {
    let input = CreatePlaceInput {
        latitude: 100.0,
        ..place_input()
    };
    assert_eq!(input.validate().unwrap_err().field(), Some("place.latitude"));
}

#[test]
fn test_update_validates_only_supplied_fields() {
    assert!(UpdatePlaceInput::default().validate().is_ok());

    let update = UpdatePlaceInput {
        title: Some("Renamed".to_string()),
        price: Some(-5.0),
        ..Default::default()
    };
    assert!(matches!(
        update.validate(),
        Err(ValidationError::NotPositive { .. })
    ));
}

#[test]
fn test_update_user_and_review() {
    let update = UpdateUserInput {
        first_name: Some("Jane".to_string()),
        ..Default::default()
    };
    assert!(update.validate().is_ok());

    let update = UpdateReviewInput {
        rating: Some(9),
        ..Default::default()
    };
    assert!(update.validate().is_err());
}
