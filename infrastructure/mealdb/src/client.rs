use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Public v1 endpoint with the shared test key.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Shared TheMealDB HTTP client configuration.
pub struct MealDbClient {
    pub client: Client,
    pub base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `lookup.php?i=<id>`: full recipe by id.
    pub fn lookup_url(&self, id: &str) -> Result<Url, url::ParseError> {
        self.endpoint("lookup.php", &[("i", id)])
    }

    /// `search.php?s=<name>`: full recipes whose name contains the query.
    pub fn search_by_name_url(&self, name: &str) -> Result<Url, url::ParseError> {
        self.endpoint("search.php", &[("s", name)])
    }

    /// `filter.php?i=<ingredient>`: partial recipes using the ingredient.
    pub fn filter_by_ingredient_url(&self, ingredient: &str) -> Result<Url, url::ParseError> {
        self.endpoint("filter.php", &[("i", ingredient)])
    }

    pub fn random_url(&self) -> Result<Url, url::ParseError> {
        self.endpoint("random.php", &[])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, url::ParseError> {
        let raw = format!("{}/{}", self.base_url, path);
        if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        }
    }
}
