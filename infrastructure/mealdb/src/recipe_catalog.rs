use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};
use url::Url;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{
    MAX_INGREDIENTS, Recipe, RecipeSummary, collect_ingredients, parse_tags,
};
use business::domain::recipe::services::RecipeCatalogService;
use business::domain::shared::value_objects::RecipeId;

use crate::client::MealDbClient;

/// Top-level envelope. `meals` is `null` or missing when nothing matched,
/// and some endpoints answer with a plain message string instead.
#[derive(Deserialize)]
struct MealDbResponse {
    #[serde(default)]
    meals: Option<MealList>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MealList {
    Meals(Vec<MealDbMeal>),
    Message(String),
}

#[derive(Debug, Deserialize)]
struct MealDbMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    /// Numbered `strIngredientN` / `strMeasureN` slots and any other field.
    #[serde(flatten)]
    slots: HashMap<String, serde_json::Value>,
}

/// Blank strings are reported by the API for unset fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl MealDbMeal {
    fn slot(&self, field: &str) -> Option<String> {
        self.slots
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

impl From<MealDbMeal> for Recipe {
    fn from(meal: MealDbMeal) -> Self {
        let ingredients = collect_ingredients((1..=MAX_INGREDIENTS).map(|i| {
            (
                meal.slot(&format!("strIngredient{}", i)),
                meal.slot(&format!("strMeasure{}", i)),
            )
        }));

        Recipe {
            id: RecipeId::new(meal.id),
            name: meal.name,
            thumbnail: non_empty(meal.thumbnail),
            category: non_empty(meal.category),
            area: non_empty(meal.area),
            instructions: non_empty(meal.instructions),
            tags: parse_tags(meal.tags.as_deref()),
            ingredients,
            youtube_url: non_empty(meal.youtube),
            source_url: non_empty(meal.source),
        }
    }
}

fn parse_meals(body: &str) -> Result<Vec<MealDbMeal>, RecipeError> {
    let response: MealDbResponse = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Could not decode MealDB response");
        RecipeError::FetchFailed
    })?;

    match response.meals {
        Some(MealList::Meals(meals)) => Ok(meals),
        Some(MealList::Message(message)) => {
            debug!(%message, "MealDB returned a message instead of meals");
            Ok(vec![])
        }
        None => Ok(vec![]),
    }
}

/// `RecipeCatalogService` over TheMealDB JSON API.
pub struct RecipeCatalogMealDb {
    client: MealDbClient,
}

impl RecipeCatalogMealDb {
    pub fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    async fn fetch_meals(
        &self,
        url: Result<Url, url::ParseError>,
    ) -> Result<Vec<MealDbMeal>, RecipeError> {
        let url = url.map_err(|e| {
            error!(error = %e, "Invalid MealDB url");
            RecipeError::FetchFailed
        })?;

        let response = self
            .client
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                error!(%url, error = %e, "MealDB request failed");
                RecipeError::FetchFailed
            })?;

        if !response.status().is_success() {
            warn!(%url, status = %response.status(), "MealDB answered with an error status");
            return Err(RecipeError::FetchFailed);
        }

        let body = response.text().await.map_err(|e| {
            error!(%url, error = %e, "Could not read MealDB response body");
            RecipeError::FetchFailed
        })?;

        parse_meals(&body)
    }

    async fn fetch_first(
        &self,
        url: Result<Url, url::ParseError>,
    ) -> Result<Option<Recipe>, RecipeError> {
        let meals = self.fetch_meals(url).await?;
        Ok(meals.into_iter().next().map(Recipe::from))
    }

    async fn fetch_summaries(
        &self,
        url: Result<Url, url::ParseError>,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        let meals = self.fetch_meals(url).await?;
        Ok(meals
            .into_iter()
            .map(|meal| RecipeSummary::from(Recipe::from(meal)))
            .collect())
    }
}

#[async_trait]
impl RecipeCatalogService for RecipeCatalogMealDb {
    async fn lookup(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError> {
        self.fetch_first(self.client.lookup_url(id.as_str())).await
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.fetch_summaries(self.client.search_by_name_url(query))
            .await
    }

    async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.fetch_summaries(self.client.filter_by_ingredient_url(ingredient))
            .await
    }

    async fn random(&self) -> Result<Option<Recipe>, RecipeError> {
        self.fetch_first(self.client.random_url()).await
    }
}
