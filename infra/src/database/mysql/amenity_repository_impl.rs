//! MySQL implementation of the AmenityRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hb_core::domain::entities::Amenity;
use hb_core::errors::DomainError;
use hb_core::repositories::AmenityRepository;

use super::{column, db_error, uuid_column};

pub struct MySqlAmenityRepository {
    pool: MySqlPool,
}

impl MySqlAmenityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub(super) fn row_to_amenity(row: &MySqlRow) -> Result<Amenity, DomainError> {
        Ok(Amenity {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl AmenityRepository for MySqlAmenityRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, DomainError> {
        let row = sqlx::query("SELECT id, name, created_at, updated_at FROM amenities WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find amenity by id", e))?;

        row.as_ref().map(Self::row_to_amenity).transpose()
    }

    async fn list(&self) -> Result<Vec<Amenity>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at, updated_at FROM amenities ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list amenities", e))?;

        rows.iter().map(Self::row_to_amenity).collect()
    }

    async fn create(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        sqlx::query("INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)")
            .bind(amenity.id.to_string())
            .bind(&amenity.name)
            .bind(amenity.created_at)
            .bind(amenity.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create amenity", e))?;

        Ok(amenity)
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, DomainError> {
        let result = sqlx::query("UPDATE amenities SET name = ?, updated_at = ? WHERE id = ?")
            .bind(&amenity.name)
            .bind(amenity.updated_at)
            .bind(amenity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update amenity", e))?;

        if result.rows_affected() == 0 && self.find_by_id(amenity.id).await?.is_none() {
            return Err(DomainError::not_found("Amenity"));
        }

        Ok(amenity)
    }
}
