#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.empty_query")]
    EmptyQuery,
    #[error("recipe.fetch_failed")]
    FetchFailed,
}
