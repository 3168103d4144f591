//! MySQL implementation of the PlaceRepository trait.
//!
//! Places own their reviews and amenity associations; `delete_cascade`
//! removes all three inside one transaction.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hb_core::domain::entities::{Amenity, Place};
use hb_core::errors::DomainError;
use hb_core::repositories::PlaceRepository;

use super::{column, db_error, is_foreign_key_violation, uuid_column};
use super::amenity_repository_impl::MySqlAmenityRepository;

const PLACE_COLUMNS: &str =
    "id, title, description, price, latitude, longitude, owner_id, created_at, updated_at";

/// MySQL implementation of PlaceRepository
pub struct MySqlPlaceRepository {
    pool: MySqlPool,
}

impl MySqlPlaceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_place(row: &MySqlRow) -> Result<Place, DomainError> {
        Ok(Place {
            id: uuid_column(row, "id")?,
            title: column(row, "title")?,
            description: column(row, "description")?,
            price: column(row, "price")?,
            latitude: column(row, "latitude")?,
            longitude: column(row, "longitude")?,
            owner_id: uuid_column(row, "owner_id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl PlaceRepository for MySqlPlaceRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, DomainError> {
        let query = format!("SELECT {} FROM places WHERE id = ?", PLACE_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find place by id", e))?;

        row.as_ref().map(Self::row_to_place).transpose()
    }

    async fn list(&self) -> Result<Vec<Place>, DomainError> {
        let query = format!("SELECT {} FROM places ORDER BY seq", PLACE_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list places", e))?;

        rows.iter().map(Self::row_to_place).collect()
    }

    async fn create(&self, place: Place) -> Result<Place, DomainError> {
        let query = r#"
            INSERT INTO places (
                id, title, description, price, latitude, longitude,
                owner_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(place.id.to_string())
            .bind(&place.title)
            .bind(&place.description)
            .bind(place.price)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.owner_id.to_string())
            .bind(place.created_at)
            .bind(place.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DomainError::not_found("Owner")
                } else {
                    db_error("Failed to create place", e)
                }
            })?;

        Ok(place)
    }

    async fn update(&self, place: Place) -> Result<Place, DomainError> {
        let query = r#"
            UPDATE places
            SET title = ?, description = ?, price = ?, latitude = ?, longitude = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&place.title)
            .bind(&place.description)
            .bind(place.price)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.updated_at)
            .bind(place.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update place", e))?;

        if result.rows_affected() == 0 && self.find_by_id(place.id).await?.is_none() {
            return Err(DomainError::not_found("Place"));
        }

        Ok(place)
    }

    async fn delete_cascade(&self, id: Uuid) -> Result<bool, DomainError> {
        let id = id.to_string();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let reviews = sqlx::query("DELETE FROM reviews WHERE place_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete place reviews", e))?;

        sqlx::query("DELETE FROM place_amenities WHERE place_id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete place amenities", e))?;

        let deleted = sqlx::query("DELETE FROM places WHERE id = ?")
            .bind(&id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete place", e))?;

        if deleted.rows_affected() == 0 {
            // Nothing to cascade from; dropping the transaction rolls it back
            return Ok(false);
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit place deletion", e))?;

        tracing::info!(
            place_id = %id,
            reviews_removed = reviews.rows_affected(),
            "Place deleted with its dependents"
        );

        Ok(true)
    }

    async fn add_amenity(&self, place_id: Uuid, amenity_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO place_amenities (place_id, amenity_id) VALUES (?, ?)")
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DomainError::not_found("Place or amenity")
                } else {
                    db_error("Failed to attach amenity", e)
                }
            })?;

        Ok(())
    }

    async fn amenities_for(&self, place_id: Uuid) -> Result<Vec<Amenity>, DomainError> {
        let query = r#"
            SELECT a.id, a.name, a.created_at, a.updated_at
            FROM place_amenities pa
            JOIN amenities a ON a.id = pa.amenity_id
            WHERE pa.place_id = ?
            ORDER BY pa.id
        "#;

        let rows = sqlx::query(query)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to load place amenities", e))?;

        rows.iter().map(MySqlAmenityRepository::row_to_amenity).collect()
    }
}
