use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDetail;
use crate::domain::shared::value_objects::RecipeId;

pub struct GetRecipeByIdParams {
    pub id: RecipeId,
}

#[async_trait]
pub trait GetRecipeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeDetail, RecipeError>;
}
