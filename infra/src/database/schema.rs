//! Schema bootstrap
//!
//! Creates the HBnB tables when they are missing. Ids are UUIDs stored as
//! `CHAR(36)`; every table carries an auto-increment `seq` so listings come
//! back in insertion order. `users.email` uses a binary collation so that
//! lookups and the unique key compare emails exactly, as the in-memory
//! store does.

use sqlx::MySqlPool;

use crate::InfrastructureError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        id CHAR(36) NOT NULL PRIMARY KEY,
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50) NOT NULL,
        email VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_users_seq (seq),
        UNIQUE KEY uq_users_email (email)
    )
"#;

const CREATE_PLACES: &str = r#"
    CREATE TABLE IF NOT EXISTS places (
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        id CHAR(36) NOT NULL PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        description TEXT NOT NULL,
        price DOUBLE NOT NULL,
        latitude DOUBLE NOT NULL,
        longitude DOUBLE NOT NULL,
        owner_id CHAR(36) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_places_seq (seq),
        CONSTRAINT fk_places_owner FOREIGN KEY (owner_id) REFERENCES users (id)
    )
"#;

const CREATE_AMENITIES: &str = r#"
    CREATE TABLE IF NOT EXISTS amenities (
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        id CHAR(36) NOT NULL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_amenities_seq (seq)
    )
"#;

// Surrogate key: attaching the same amenity twice stores two rows.
const CREATE_PLACE_AMENITIES: &str = r#"
    CREATE TABLE IF NOT EXISTS place_amenities (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        place_id CHAR(36) NOT NULL,
        amenity_id CHAR(36) NOT NULL,
        KEY idx_place_amenities_place (place_id),
        CONSTRAINT fk_place_amenities_place FOREIGN KEY (place_id) REFERENCES places (id),
        CONSTRAINT fk_place_amenities_amenity FOREIGN KEY (amenity_id) REFERENCES amenities (id)
    )
"#;

const CREATE_REVIEWS: &str = r#"
    CREATE TABLE IF NOT EXISTS reviews (
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        id CHAR(36) NOT NULL PRIMARY KEY,
        text TEXT NOT NULL,
        rating INT NOT NULL,
        user_id CHAR(36) NOT NULL,
        place_id CHAR(36) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        updated_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_reviews_seq (seq),
        KEY idx_reviews_place (place_id),
        CONSTRAINT fk_reviews_user FOREIGN KEY (user_id) REFERENCES users (id),
        CONSTRAINT fk_reviews_place FOREIGN KEY (place_id) REFERENCES places (id)
    )
"#;

/// Create every table that does not exist yet, parents before children
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Ensuring database schema");

    for statement in [
        CREATE_USERS,
        CREATE_PLACES,
        CREATE_AMENITIES,
        CREATE_PLACE_AMENITIES,
        CREATE_REVIEWS,
    ] {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            tracing::error!("Schema bootstrap failed: {}", e);
            InfrastructureError::Database(e)
        })?;
    }

    Ok(())
}
