//! Type definitions shared by every endpoint

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus, MessageResponse};
