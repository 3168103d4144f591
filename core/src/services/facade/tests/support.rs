//! Shared fixtures for facade tests

use uuid::Uuid;

use crate::domain::entities::{Place, User};
use crate::domain::value_objects::{
    Actor, AdminCreateUserInput, AdminUpdateUserInput, CreatePlaceInput, CreateUserInput,
};
use crate::repositories::InMemoryStore;
use crate::services::facade::HbnbFacade;
use crate::services::password::PasswordHasher;

pub type TestFacade = HbnbFacade<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

pub fn facade() -> TestFacade {
    HbnbFacade::in_memory(InMemoryStore::new(), PasswordHasher::with_cost(4))
}

pub fn user_input(email: &str) -> CreateUserInput {
    CreateUserInput {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
    }
}

pub async fn register(facade: &TestFacade, email: &str) -> (User, Actor) {
    let user = facade.create_user(user_input(email)).await.unwrap();
    let actor = Actor::user(user.id);
    (user, actor)
}

pub async fn register_admin(facade: &TestFacade, email: &str) -> (User, Actor) {
    // Any admin token can promote; the issuing admin need not exist
    let (user, _) = register(facade, email).await;
    let bootstrap = Actor::admin(Uuid::new_v4());
    let admin = facade
        .admin_update_user(
            &bootstrap,
            user.id,
            AdminUpdateUserInput {
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let actor = Actor::admin(admin.id);
    (admin, actor)
}

pub fn place_input(owner_id: Uuid) -> CreatePlaceInput {
    CreatePlaceInput {
        title: "Cozy Apartment".to_string(),
        description: "A nice place to stay".to_string(),
        price: 100.0,
        latitude: 37.7749,
        longitude: -122.4194,
        owner_id,
    }
}

pub async fn create_place(facade: &TestFacade, owner: &Actor) -> Place {
    let owner_id = owner.id().unwrap();
    facade.create_place(owner, place_input(owner_id)).await.unwrap()
}

pub fn admin_user_input(email: &str, is_admin: Option<bool>) -> AdminCreateUserInput {
    AdminCreateUserInput {
        first_name: "Ada".to_string(),
        last_name: "Admin".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        is_admin,
    }
}
