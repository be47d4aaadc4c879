use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::RecipeId;

#[async_trait]
pub trait ListFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<RecipeId>, FavoriteError>;
}
