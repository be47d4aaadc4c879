use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::RecipeId;

/// Favorite recipe ids in the order they were added.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FavoriteListResponse {
    pub favorites: Vec<String>,
    pub count: usize,
}

impl From<Vec<RecipeId>> for FavoriteListResponse {
    fn from(ids: Vec<RecipeId>) -> Self {
        Self {
            count: ids.len(),
            favorites: ids.into_iter().map(RecipeId::into_inner).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct FavoriteStatusResponse {
    pub id: String,
    pub is_favorite: bool,
}
