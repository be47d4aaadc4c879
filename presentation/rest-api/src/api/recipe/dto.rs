use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::recipe::model::{
    Ingredient, Recipe, RecipeDetail, RecipeSummary, SearchType,
};

/// Shown in place of results when a search matches nothing.
pub const EMPTY_SEARCH_MESSAGE: &str = "No recipes found";

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct IngredientResponse {
    pub name: String,
    pub measure: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: ingredient.name,
            measure: ingredient.measure,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<IngredientResponse>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.into_inner(),
            name: recipe.name,
            thumbnail: recipe.thumbnail,
            category: recipe.category,
            area: recipe.area,
            instructions: recipe.instructions,
            tags: recipe.tags,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            youtube_url: recipe.youtube_url,
            source_url: recipe.source_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeDetailResponse {
    pub recipe: RecipeResponse,
    pub is_favorite: bool,
}

impl From<RecipeDetail> for RecipeDetailResponse {
    fn from(detail: RecipeDetail) -> Self {
        Self {
            recipe: detail.recipe.into(),
            is_favorite: detail.is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RecipeSummaryResponse {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.id.into_inner(),
            name: summary.name,
            thumbnail: summary.thumbnail,
            category: summary.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SearchRecipesResponse {
    /// The trimmed query that was searched
    pub query: String,
    /// `name` or `ingredient`
    pub search_type: String,
    pub count: usize,
    pub recipes: Vec<RecipeSummaryResponse>,
    /// Empty-state message, present only when nothing matched
    pub message: Option<String>,
}

impl SearchRecipesResponse {
    pub fn new(query: String, search_type: SearchType, recipes: Vec<RecipeSummary>) -> Self {
        let message = recipes
            .is_empty()
            .then(|| EMPTY_SEARCH_MESSAGE.to_string());

        Self {
            query,
            search_type: search_type.to_string(),
            count: recipes.len(),
            recipes: recipes.into_iter().map(Into::into).collect(),
            message,
        }
    }
}

/// Unknown or missing search types fall back to a name search.
pub fn parse_search_type(raw: Option<&str>) -> SearchType {
    raw.and_then(|value| value.trim().to_ascii_lowercase().parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::RecipeId;

    fn summary(id: &str, name: &str) -> RecipeSummary {
        RecipeSummary {
            id: RecipeId::new(id),
            name: name.to_string(),
            thumbnail: None,
            category: Some("Chicken".to_string()),
        }
    }

    #[test]
    fn should_parse_ingredient_search_type() {
        assert_eq!(parse_search_type(Some("ingredient")), SearchType::Ingredient);
        assert_eq!(parse_search_type(Some(" Ingredient ")), SearchType::Ingredient);
    }

    #[test]
    fn should_fall_back_to_name_search_when_type_is_unknown() {
        assert_eq!(parse_search_type(None), SearchType::Name);
        assert_eq!(parse_search_type(Some("area")), SearchType::Name);
    }

    #[test]
    fn should_carry_empty_state_message_when_no_results() {
        let response = SearchRecipesResponse::new("chicken".to_string(), SearchType::Name, vec![]);

        assert_eq!(response.count, 0);
        assert!(response.recipes.is_empty());
        assert_eq!(response.message.as_deref(), Some(EMPTY_SEARCH_MESSAGE));
        assert_eq!(response.search_type, "name");
    }

    #[test]
    fn should_omit_message_when_results_exist() {
        let response = SearchRecipesResponse::new(
            "chicken".to_string(),
            SearchType::Ingredient,
            vec![summary("52940", "Brown Stew Chicken"), summary("52795", "Chicken Handi")],
        );

        assert_eq!(response.count, 2);
        assert_eq!(response.recipes[1].id, "52795");
        assert!(response.message.is_none());
        assert_eq!(response.search_type, "ingredient");
    }
}
