//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations live in this crate (in-memory) and in `hb_infra` (MySQL).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Email uniqueness is enforced here as well as by the facade: `create` and
/// `update` must fail with `DomainError::Conflict` when another user already
/// holds the email, even if two requests race past the facade check.
///
/// Emails compare exactly: `John@example.com` and `john@example.com` are
/// two different addresses for lookup and for uniqueness. Implementations
/// must not fold case.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by exact, case-sensitive email
    ///
    /// # Example
    /// ```no_run
    /// # use hb_core::repositories::UserRepository;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_email("john.doe@example.com").await? {
    ///     Some(user) => println!("User found: {:?}", user.id),
    ///     None => println!("User not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users in creation order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace a stored user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with this id
    /// * `Err(DomainError::Conflict)` - New email belongs to another user
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
