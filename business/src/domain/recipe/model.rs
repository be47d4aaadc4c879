use crate::domain::shared::value_objects::RecipeId;

/// Highest ingredient slot the catalog exposes per recipe.
pub const MAX_INGREDIENTS: usize = 20;

/// How a search query is matched against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchType {
    /// Substring match on the recipe name
    #[default]
    Name,
    /// Recipes that use the given main ingredient
    Ingredient,
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchType::Name => write!(f, "name"),
            SearchType::Ingredient => write!(f, "ingredient"),
        }
    }
}

impl std::str::FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SearchType::Name),
            "ingredient" => Ok(SearchType::Ingredient),
            _ => Err(format!("Invalid search type: {}", s)),
        }
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Free-form measure such as "1 tbs"; empty when the catalog gives none.
    pub measure: String,
}

/// Full recipe record as provided by the catalog. Read-only for this system.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub youtube_url: Option<String>,
    pub source_url: Option<String>,
}

/// Card-sized view of a recipe, as returned by searches.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            thumbnail: recipe.thumbnail,
            category: recipe.category,
        }
    }
}

/// A recipe together with whether it is currently a favorite.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

/// Splits the catalog's comma-separated tag string.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|tags| {
        tags.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Builds the ingredient list from numbered (ingredient, measure) slots.
///
/// Only the first `MAX_INGREDIENTS` slots are read. Slots with a blank
/// ingredient are skipped; measures are trimmed.
pub fn collect_ingredients<I>(slots: I) -> Vec<Ingredient>
where
    I: IntoIterator<Item = (Option<String>, Option<String>)>,
{
    slots
        .into_iter()
        .take(MAX_INGREDIENTS)
        .filter_map(|(name, measure)| {
            let name = name?;
            if name.trim().is_empty() {
                return None;
            }
            Some(Ingredient {
                name,
                measure: measure.map(|m| m.trim().to_string()).unwrap_or_default(),
            })
        })
        .collect()
}
