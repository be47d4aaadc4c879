use async_trait::async_trait;

use crate::domain::shared::value_objects::RecipeId;

use super::errors::RecipeError;
use super::model::{Recipe, RecipeSummary};

/// Service port for the external recipe catalog.
///
/// "No results" is never an error: lookups return `Ok(None)` and searches
/// return an empty list. `RecipeError::FetchFailed` is reserved for
/// transport or decoding failures.
#[async_trait]
pub trait RecipeCatalogService: Send + Sync {
    async fn lookup(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError>;

    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError>;

    async fn search_by_ingredient(&self, ingredient: &str)
    -> Result<Vec<RecipeSummary>, RecipeError>;

    async fn random(&self) -> Result<Option<Recipe>, RecipeError>;
}
