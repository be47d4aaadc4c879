use std::sync::Arc;

use async_trait::async_trait;

use crate::application::favorite::store::FavoriteStore;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::use_cases::list_recipes::ListFavoriteRecipesUseCase;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::storage::KeyValueStore;

/// Resolves every favorite id into a recipe card, keeping favorite order.
pub struct ListFavoriteRecipesUseCaseImpl {
    pub storage: Arc<dyn KeyValueStore>,
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListFavoriteRecipesUseCase for ListFavoriteRecipesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<RecipeSummary>, FavoriteError> {
        let favorites = FavoriteStore::new(self.storage.as_ref(), self.logger.as_ref())
            .load_or_empty()
            .await?;

        self.logger.info(&format!(
            "Resolving {} favorite recipes",
            favorites.len()
        ));

        let mut recipes = Vec::with_capacity(favorites.len());
        for id in favorites.ids() {
            match self.catalog.lookup(id).await? {
                Some(recipe) => recipes.push(RecipeSummary::from(recipe)),
                None => self
                    .logger
                    .warn(&format!("Favorite recipe {} no longer exists in catalog", id)),
            }
        }

        Ok(recipes)
    }
}
