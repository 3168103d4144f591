//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use hb_core::domain::entities::Review;
use hb_core::errors::DomainError;
use hb_core::repositories::ReviewRepository;

use super::{column, db_error, is_foreign_key_violation, uuid_column};

const REVIEW_COLUMNS: &str = "id, text, rating, user_id, place_id, created_at, updated_at";

/// MySQL implementation of ReviewRepository
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &MySqlRow) -> Result<Review, DomainError> {
        Ok(Review {
            id: uuid_column(row, "id")?,
            text: column(row, "text")?,
            rating: column(row, "rating")?,
            user_id: uuid_column(row, "user_id")?,
            place_id: uuid_column(row, "place_id")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews WHERE id = ?", REVIEW_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to find review by id", e))?;

        row.as_ref().map(Self::row_to_review).transpose()
    }

    async fn list(&self) -> Result<Vec<Review>, DomainError> {
        let query = format!("SELECT {} FROM reviews ORDER BY seq", REVIEW_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list reviews", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn find_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, DomainError> {
        let query = format!(
            "SELECT {} FROM reviews WHERE place_id = ? ORDER BY seq",
            REVIEW_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list reviews for place", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let query = r#"
            INSERT INTO reviews (
                id, text, rating, user_id, place_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(review.id.to_string())
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.user_id.to_string())
            .bind(review.place_id.to_string())
            .bind(review.created_at)
            .bind(review.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // A place deleted between the facade check and the insert
                if is_foreign_key_violation(&e) {
                    DomainError::not_found("Place")
                } else {
                    db_error("Failed to create review", e)
                }
            })?;

        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let result = sqlx::query("UPDATE reviews SET text = ?, rating = ?, updated_at = ? WHERE id = ?")
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.updated_at)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to update review", e))?;

        if result.rows_affected() == 0 && self.find_by_id(review.id).await?.is_none() {
            return Err(DomainError::not_found("Review"));
        }

        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete review", e))?;

        Ok(result.rows_affected() > 0)
    }
}
