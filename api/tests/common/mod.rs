//! Shared fixture for the HTTP integration tests
//!
//! Builds the real application over the in-memory store. Users are seeded
//! through the facade and tokens minted directly, so each test only drives
//! the endpoint it is about.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, App, Error};
use uuid::Uuid;

use hb_api::app::create_app;
use hb_api::routes::AppState;
use hb_core::domain::value_objects::{CreatePlaceInput, CreateUserInput};
use hb_core::services::{AuthService, HbnbFacade, PasswordHasher, TokenService, TokenServiceConfig};
use hb_core::{Actor, InMemoryStore, Place, User};
use hb_shared::config::AppConfig;

pub type TestState = AppState<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

pub const PASSWORD: &str = "secret123";

pub struct Fixture {
    pub state: web::Data<TestState>,
    pub tokens: Arc<TokenService>,
    pub config: AppConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let config = AppConfig::development();
        let hasher = PasswordHasher::with_cost(4);

        let facade = Arc::new(HbnbFacade::in_memory(InMemoryStore::new(), hasher));
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(
            &config.auth.jwt,
        )));
        let auth_service = Arc::new(AuthService::new(
            facade.user_repository(),
            Arc::clone(&tokens),
            hasher,
        ));

        Self {
            state: web::Data::new(AppState::new(facade, auth_service)),
            tokens,
            config,
        }
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), &self.config)
    }

    /// Register a regular user with [`PASSWORD`]
    pub async fn user(&self, first_name: &str, email: &str) -> User {
        self.state
            .facade
            .create_user(CreateUserInput {
                first_name: first_name.to_string(),
                last_name: "Doe".to_string(),
                email: email.to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .unwrap()
    }

    pub async fn place(&self, owner: &User, title: &str) -> Place {
        self.state
            .facade
            .create_place(
                &Actor::user(owner.id),
                CreatePlaceInput {
                    title: title.to_string(),
                    description: "A nice spot".to_string(),
                    price: 100.0,
                    latitude: 37.77,
                    longitude: -122.41,
                    owner_id: owner.id,
                },
            )
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        self.tokens
            .generate_access_token(user.id, user.is_admin)
            .unwrap()
    }

    /// Token for an administrator that has no user record
    pub fn admin_token(&self) -> String {
        self.tokens
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap()
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
