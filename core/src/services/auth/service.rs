//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::{Actor, AuthResponse};
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Authenticates credentials and issues access tokens
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            hasher,
        }
    }

    /// Verify email and password and issue an access token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Bearer token for the user
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse, DomainError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) if self.hasher.verify(password, &user.password_hash) => user,
            _ => {
                tracing::warn!("Login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let access_token = self.tokens.generate_access_token(user.id, user.is_admin)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse::bearer(
            access_token,
            self.tokens.access_token_expiry_seconds(),
        ))
    }

    /// Resolve a bearer token into the acting user
    pub fn resolve(&self, token: &str) -> Result<Actor, DomainError> {
        self.tokens.resolve(token)
    }
}
