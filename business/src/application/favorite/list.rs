use std::sync::Arc;

use async_trait::async_trait;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::list::ListFavoritesUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;
use crate::domain::storage::KeyValueStore;

pub struct ListFavoritesUseCaseImpl {
    pub storage: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListFavoritesUseCase for ListFavoritesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<RecipeId>, FavoriteError> {
        self.logger.info("Listing favorites");

        let favorites = FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref())
            .load_or_empty()
            .await?;

        self.logger.info(&format!("Found {} favorites", favorites.len()));
        Ok(favorites.into_ids())
    }
}
