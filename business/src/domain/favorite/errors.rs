#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.malformed_data")]
    MalformedData(String),
    #[error("favorite.recipe_lookup_failed")]
    RecipeLookup(#[from] crate::domain::recipe::errors::RecipeError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
