use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::RecipeId;

pub struct RemoveFavoriteParams {
    pub id: RecipeId,
}

/// Removes a recipe from the favorites and returns the resulting list.
#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoriteParams)
    -> Result<Vec<RecipeId>, FavoriteError>;
}
