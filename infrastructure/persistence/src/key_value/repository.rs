use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, error};

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

use super::entity::KeyValueEntity;

pub struct KeyValueStorePostgres {
    pool: PgPool,
}

impl KeyValueStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStorePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM key_value_store WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(key, error = %e, "Failed to read key");
            RepositoryError::DatabaseError
        })?;

        if let Some(entity) = &entity {
            debug!(key = %entity.key, updated_at = %entity.updated_at, "Key loaded");
        }

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(key, error = %e, "Failed to write key");
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM key_value_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(key, error = %e, "Failed to delete key");
                RepositoryError::DatabaseError
            })?;

        Ok(())
    }
}
