//! # Infrastructure Layer
//!
//! This crate implements the persistence side of the HBnB backend. It
//! provides the MySQL connection pool, the schema bootstrap and SQLx
//! implementations of the repository traits defined in `hb_core`.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use hb_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration re-exported from the shared crate
pub mod config {
    pub use hb_shared::config::DatabaseConfig;
}

use thiserror::Error;

/// Infrastructure-level errors
///
/// Raised while setting up infrastructure (pool creation, schema bootstrap).
/// Repository calls report through `DomainError` instead.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::internal(err.to_string())
    }
}
