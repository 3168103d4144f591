//! MySQL repository implementations
//!
//! Concrete implementations of the `hb_core` repository traits on top of a
//! SQLx `MySqlPool`.

mod amenity_repository_impl;
mod place_repository_impl;
mod review_repository_impl;
mod user_repository_impl;

pub use amenity_repository_impl::MySqlAmenityRepository;
pub use place_repository_impl::MySqlPlaceRepository;
pub use review_repository_impl::MySqlReviewRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use hb_core::errors::DomainError;

/// Convert a SQLx failure into a domain error, logging the details
fn db_error(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, err);
    DomainError::internal(format!("{}: {}", context, err))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// Read a `CHAR(36)` column as a UUID
fn uuid_column(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
    let raw: String = row
        .try_get(column)
        .map_err(|e| db_error(&format!("Failed to get {}", column), e))?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}

fn column<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column)
        .map_err(|e| db_error(&format!("Failed to get {}", column), e))
}
