//! Token service module for JWT management
//!
//! Issues HS256 access tokens that carry the user id and admin flag, and
//! resolves presented tokens back into an [`Actor`](crate::domain::Actor).

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
