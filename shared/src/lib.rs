//! Shared utilities and common types for the HBnB server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelopes shared by every endpoint
//! - Utility functions (email shape validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
pub use utils::validation;
