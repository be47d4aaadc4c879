use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::shared::value_objects::RecipeId;

pub struct IsFavoriteParams {
    pub id: RecipeId,
}

#[async_trait]
pub trait IsFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: IsFavoriteParams) -> Result<bool, FavoriteError>;
}
