use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::RecipeCatalogService;
use crate::domain::recipe::use_cases::random::GetRandomRecipeUseCase;

pub struct GetRandomRecipeUseCaseImpl {
    pub catalog: Arc<dyn RecipeCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRandomRecipeUseCase for GetRandomRecipeUseCaseImpl {
    async fn execute(&self) -> Result<Recipe, RecipeError> {
        self.logger.info("Fetching a random recipe");

        let recipe = self
            .catalog
            .random()
            .await
            .inspect_err(|e| {
                self.logger.error(&format!("Error fetching random recipe: {}", e))
            })?
            .ok_or(RecipeError::NotFound)?;

        self.logger.info(&format!("Random recipe picked: {} ({})", recipe.name, recipe.id));
        Ok(recipe)
    }
}
