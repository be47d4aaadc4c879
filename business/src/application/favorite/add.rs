use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::RecipeId;
use crate::domain::storage::KeyValueStore;

pub struct AddFavoriteUseCaseImpl {
    pub storage: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
    /// Shared by every favorites writer; held from load until save.
    pub write_lock: Arc<Mutex<()>>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Vec<RecipeId>, FavoriteError> {
        self.logger.info(&format!("Adding recipe {} to favorites", params.id));

        let _guard = self.write_lock.lock().await;
        let store = FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref());
        let mut favorites = store.load_or_empty().await?;

        if favorites.insert(params.id.clone()) {
            store.save(&favorites).await?;
        } else {
            self.logger.debug(&format!("Recipe {} is already a favorite", params.id));
        }

        Ok(favorites.into_ids())
    }
}
