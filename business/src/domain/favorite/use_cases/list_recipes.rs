use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::recipe::model::RecipeSummary;

#[async_trait]
pub trait ListFavoriteRecipesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<RecipeSummary>, FavoriteError>;
}
