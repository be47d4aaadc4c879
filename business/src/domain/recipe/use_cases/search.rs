use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeSummary, SearchType};

pub struct SearchRecipesParams {
    pub query: String,
    pub search_type: SearchType,
}

#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SearchRecipesParams)
    -> Result<Vec<RecipeSummary>, RecipeError>;
}
