//! Bearer-token resolution seam used by the HTTP layer

use crate::domain::value_objects::Actor;
use crate::errors::DomainError;
use crate::repositories::UserRepository;

use super::service::AuthService;

/// Turns a bearer token into the acting user
///
/// Object safe so the web layer can hold it as `dyn TokenResolver` without
/// knowing the repository type behind the service.
pub trait TokenResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<Actor, DomainError>;
}

impl<U: UserRepository> TokenResolver for AuthService<U> {
    fn resolve(&self, token: &str) -> Result<Actor, DomainError> {
        AuthService::resolve(self, token)
    }
}
