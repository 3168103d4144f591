//! Authentication service module
//!
//! Credential login and bearer-token resolution.

mod resolver;
mod service;


pub use resolver::TokenResolver;
pub use service::AuthService;
