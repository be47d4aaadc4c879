use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

#[async_trait]
pub trait GetRandomRecipeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Recipe, RecipeError>;
}
