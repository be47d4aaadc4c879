use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::RecipeId;

pub struct AddFavoriteParams {
    pub id: RecipeId,
}

/// Adds a recipe to the favorites and returns the resulting list.
#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Vec<RecipeId>, FavoriteError>;
}
