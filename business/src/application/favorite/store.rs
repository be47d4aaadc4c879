use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::{FAVORITES_KEY, FavoriteSet};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStore;

/// Read/write access to the persisted favorite set.
///
/// Holds no state of its own: every call goes back to storage.
pub struct FavoriteStore<'a> {
    storage: &'a dyn KeyValueStore,
    logger: &'a dyn Logger,
}

impl<'a> FavoriteStore<'a> {
    pub fn new(storage: &'a dyn KeyValueStore, logger: &'a dyn Logger) -> Self {
        Self { storage, logger }
    }

    /// Loads the set. A missing key is an empty set; undecodable data is
    /// `FavoriteError::MalformedData`.
    pub async fn load(&self) -> Result<FavoriteSet, FavoriteError> {
        match self.storage.get(FAVORITES_KEY).await? {
            Some(raw) => FavoriteSet::decode(&raw),
            None => Ok(FavoriteSet::new()),
        }
    }

    /// Loads the set, degrading malformed data to an empty set.
    pub async fn load_or_empty(&self) -> Result<FavoriteSet, FavoriteError> {
        match self.load().await {
            Err(FavoriteError::MalformedData(reason)) => {
                self.logger.warn(&format!(
                    "Stored favorites are malformed, treating as empty: {}",
                    reason
                ));
                Ok(FavoriteSet::new())
            }
            other => other,
        }
    }

    pub async fn save(&self, set: &FavoriteSet) -> Result<(), FavoriteError> {
        let raw = set.encode()?;
        self.storage.set(FAVORITES_KEY, &raw).await?;
        self.logger.debug(&format!("Persisted {} favorites", set.len()));
        Ok(())
    }
}
