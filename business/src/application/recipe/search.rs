use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeSummary, SearchType};
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::search::{SearchRecipesParams, SearchRecipesUseCase};

pub struct SearchRecipesUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: SearchRecipesParams,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        let query = params.query.trim();
        if query.is_empty() {
            return Err(RecipeError::EmptyQuery);
        }

        self.logger.info(&format!("Searching recipes by {}: {}", params.search_type, query));

        let result = match params.search_type {
            SearchType::Name => self.catalog.search_by_name(query).await,
            SearchType::Ingredient => self.catalog.search_by_ingredient(query).await,
        };

        match result {
            Ok(recipes) => {
                self.logger.info(&format!("Found {} recipes for \"{}\"", recipes.len(), query));
                Ok(recipes)
            }
            Err(err) => {
                self.logger.error(&format!("Recipe search for \"{}\" failed: {}", query, err));
                Err(err)
            }
        }
    }
}
