//! Unit tests for user entity

use crate::domain::entities::user::User;

fn sample_user() -> User {
    User::new(
        "John".to_string(),
        "Doe".to_string(),
        "john.doe@example.com".to_string(),
        "$2b$04$hash".to_string(),
        false,
    )
}

#[test]
fn test_new_user_creation() {
    let user = sample_user();

    assert_eq!(user.first_name, "John");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.email, "john.doe@example.com");
    assert!(!user.is_admin);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_ids_are_unique() {
    assert_ne!(sample_user().id, sample_user().id);
}

#[test]
fn test_password_hash_never_serialized() {
    let json = serde_json::to_value(sample_user()).unwrap();
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "john.doe@example.com");
}

#[test]
fn test_touch_moves_updated_at_forward() {
    let mut user = sample_user();
    let before = user.updated_at;
    user.touch();
    assert!(user.updated_at >= before);
    assert_eq!(user.created_at, before);
}
