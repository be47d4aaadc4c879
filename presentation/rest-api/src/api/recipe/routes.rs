use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::random::GetRandomRecipeUseCase;
use business::domain::recipe::use_cases::search::{SearchRecipesParams, SearchRecipesUseCase};
use business::domain::shared::value_objects::RecipeId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{
    RecipeDetailResponse, RecipeResponse, SearchRecipesResponse, parse_search_type,
};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    search_use_case: Arc<dyn SearchRecipesUseCase>,
    random_use_case: Arc<dyn GetRandomRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        search_use_case: Arc<dyn SearchRecipesUseCase>,
        random_use_case: Arc<dyn GetRandomRecipeUseCase>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            search_use_case,
            random_use_case,
        }
    }
}

/// Recipe catalog API
///
/// Read-only access to TheMealDB recipes.
#[OpenApi]
impl RecipeApi {
    /// Search recipes
    ///
    /// Matches `q` against recipe names, or against main ingredients when
    /// `type=ingredient`. A search without matches answers 200 with an empty
    /// list and a `message`; a catalog failure answers 502.
    #[oai(path = "/recipes/search", method = "get", tag = "ApiTags::Recipes")]
    async fn search_recipes(
        &self,
        q: Query<Option<String>>,
        #[oai(name = "type")] search_type: Query<Option<String>>,
    ) -> SearchRecipesApiResponse {
        let query = q.0.unwrap_or_default().trim().to_string();
        let search_type = parse_search_type(search_type.0.as_deref());

        match self
            .search_use_case
            .execute(SearchRecipesParams {
                query: query.clone(),
                search_type,
            })
            .await
        {
            Ok(recipes) => SearchRecipesApiResponse::Ok(Json(SearchRecipesResponse::new(
                query,
                search_type,
                recipes,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchRecipesApiResponse::BadRequest(json),
                    _ => SearchRecipesApiResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get a random recipe
    #[oai(path = "/recipes/random", method = "get", tag = "ApiTags::Recipes")]
    async fn get_random_recipe(&self) -> GetRandomRecipeResponse {
        match self.random_use_case.execute().await {
            Ok(recipe) => GetRandomRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRandomRecipeResponse::NotFound(json),
                    _ => GetRandomRecipeResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get a recipe by ID
    ///
    /// Returns the full recipe and whether it is currently a favorite.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe_by_id(&self, id: Path<String>) -> GetRecipeByIdResponse {
        let Some(id) = RecipeId::parse(&id.0) else {
            return GetRecipeByIdResponse::BadRequest(ErrorResponse::validation(
                "recipe.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetRecipeByIdParams { id })
            .await
        {
            Ok(detail) => GetRecipeByIdResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeByIdResponse::NotFound(json),
                    _ => GetRecipeByIdResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchRecipesApiResponse {
    #[oai(status = 200)]
    Ok(Json<SearchRecipesResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRandomRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeDetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
