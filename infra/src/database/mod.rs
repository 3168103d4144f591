//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Schema bootstrap
//! - Repository implementations for users, places, amenities and reviews

pub mod connection;
pub mod mysql;
pub mod schema;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlAmenityRepository, MySqlPlaceRepository, MySqlReviewRepository, MySqlUserRepository,
};
pub use schema::ensure_schema;
