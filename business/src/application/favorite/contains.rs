use std::sync::Arc;

use async_trait::async_trait;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::contains::{IsFavoriteParams, IsFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStore;

pub struct IsFavoriteUseCaseImpl {
    pub storage: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IsFavoriteUseCase for IsFavoriteUseCaseImpl {
    async fn execute(&self, params: IsFavoriteParams) -> Result<bool, FavoriteError> {
        let favorites = FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref())
            .load_or_empty()
            .await?;

        Ok(favorites.contains(&params.id))
    }
}
