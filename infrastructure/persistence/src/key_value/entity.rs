use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `key_value_store` table.
#[derive(Debug, FromRow)]
pub struct KeyValueEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
