use std::sync::Arc;

use async_trait::async_trait;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetail;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use crate::domain::storage::KeyValueStore;

pub struct GetRecipeByIdUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub storage: Arc<dyn KeyValueStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeDetail, RecipeError> {
        self.logger.info(&format!("Fetching recipe by id: {}", params.id));

        let recipe = self
            .catalog
            .lookup(&params.id)
            .await?
            .ok_or(RecipeError::NotFound)?;

        // A favorites read failure must not hide the recipe itself.
        let is_favorite = match FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref())
            .load_or_empty()
            .await
        {
            Ok(favorites) => favorites.contains(&recipe.id),
            Err(err) => {
                self.logger.error(&format!(
                    "Could not read favorites for recipe {}: {}",
                    recipe.id, err
                ));
                false
            }
        };

        Ok(RecipeDetail {
            recipe,
            is_favorite,
        })
    }
}
