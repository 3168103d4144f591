//! Business services containing domain logic and use cases.

pub mod auth;
pub mod facade;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, TokenResolver};
pub use facade::HbnbFacade;
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
