//! bcrypt password hashing

use crate::errors::{AuthError, DomainError};

/// Lowest work factor bcrypt accepts
const MIN_COST: u32 = 4;
/// Highest work factor bcrypt accepts
const MAX_COST: u32 = 31;

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher using bcrypt's default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Hasher with an explicit cost, clamped to bcrypt's accepted range
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            DomainError::Auth(AuthError::HashingFailed)
        })
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed hash counts as a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
