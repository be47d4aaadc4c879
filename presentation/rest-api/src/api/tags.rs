use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Service liveness
    Health,
    /// Recipe catalog lookups and searches
    Recipes,
    /// The persisted favorite recipe set
    Favorites,
}
