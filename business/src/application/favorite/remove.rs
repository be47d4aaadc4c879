use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;
use crate::domain::storage::KeyValueStore;

pub struct RemoveFavoriteUseCaseImpl {
    pub storage: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
    /// Shared by every favorites writer; held from load until save.
    pub write_lock: Arc<Mutex<()>>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveFavoriteParams,
    ) -> Result<Vec<RecipeId>, FavoriteError> {
        self.logger.info(&format!("Removing recipe {} from favorites", params.id));

        let _guard = self.write_lock.lock().await;
        let store = FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref());
        let mut favorites = store.load_or_empty().await?;

        if favorites.remove(&params.id) {
            store.save(&favorites).await?;
        } else {
            self.logger.debug(&format!("Recipe {} was not a favorite", params.id));
        }

        Ok(favorites.into_ids())
    }
}
