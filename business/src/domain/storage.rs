use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Persistence port for string values stored under fixed keys.
///
/// Implementations must treat a missing key as `Ok(None)`, never as an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
