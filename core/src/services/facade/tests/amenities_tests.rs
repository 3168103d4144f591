//! Facade tests for amenity operations

use uuid::Uuid;

use super::support::{facade, register, register_admin};
use crate::domain::value_objects::AmenityInput;
use crate::errors::DomainError;
use crate::policy::Denial;

fn input(name: &str) -> AmenityInput {
    AmenityInput {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_update_amenity() {
    let facade = facade();
    let wifi = facade.create_amenity(input("Wi-Fi")).await.unwrap();

    let renamed = facade.update_amenity(wifi.id, input("Fast Wi-Fi")).await.unwrap();
    assert_eq!(renamed.name, "Fast Wi-Fi");
    assert_eq!(facade.list_amenities().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_amenity_name_validated() {
    let facade = facade();
    assert!(matches!(
        facade.create_amenity(input("")).await,
        Err(DomainError::Validation(_))
    ));
    assert!(facade
        .create_amenity(input(&"x".repeat(51)))
        .await
        .is_err());
    assert!(facade.list_amenities().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_missing_amenity() {
    let err = facade()
        .update_amenity(Uuid::new_v4(), input("Pool"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Amenity not found");
}

#[tokio::test]
async fn test_admin_amenity_operations() {
    let facade = facade();
    let (_, regular) = register(&facade, "john@example.com").await;
    let (_, admin) = register_admin(&facade, "admin@example.com").await;

    let err = facade
        .admin_create_amenity(&regular, input("Pool"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(Denial::InsufficientPrivilege)));

    // Privilege is checked before the amenity lookup
    let err = facade
        .admin_update_amenity(&regular, Uuid::new_v4(), input("Pool"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(Denial::InsufficientPrivilege)));

    let pool = facade.admin_create_amenity(&admin, input("Pool")).await.unwrap();
    let sauna = facade
        .admin_update_amenity(&admin, pool.id, input("Sauna"))
        .await
        .unwrap();
    assert_eq!(sauna.name, "Sauna");
}
