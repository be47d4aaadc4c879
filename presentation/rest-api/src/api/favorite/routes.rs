use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::contains::{IsFavoriteParams, IsFavoriteUseCase};
use business::domain::favorite::use_cases::list::ListFavoritesUseCase;
use business::domain::favorite::use_cases::list_recipes::ListFavoriteRecipesUseCase;
use business::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use business::domain::shared::value_objects::RecipeId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::favorite::dto::{FavoriteListResponse, FavoriteStatusResponse};
use crate::api::recipe::dto::RecipeSummaryResponse;
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "favorite.invalid_id";

pub struct FavoriteApi {
    list_use_case: Arc<dyn ListFavoritesUseCase>,
    list_recipes_use_case: Arc<dyn ListFavoriteRecipesUseCase>,
    add_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
    contains_use_case: Arc<dyn IsFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        list_use_case: Arc<dyn ListFavoritesUseCase>,
        list_recipes_use_case: Arc<dyn ListFavoriteRecipesUseCase>,
        add_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
        contains_use_case: Arc<dyn IsFavoriteUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            list_recipes_use_case,
            add_use_case,
            remove_use_case,
            contains_use_case,
        }
    }
}

/// Favorites API
///
/// The persisted set of favorite recipe ids. Adding and removing are
/// idempotent and both answer with the resulting list.
#[OpenApi]
impl FavoriteApi {
    /// List favorite recipe ids
    #[oai(path = "/favorites", method = "get", tag = "ApiTags::Favorites")]
    async fn list_favorites(&self) -> ListFavoritesResponse {
        match self.list_use_case.execute().await {
            Ok(ids) => ListFavoritesResponse::Ok(Json(ids.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListFavoritesResponse::InternalError(json)
            }
        }
    }

    /// List favorite recipes
    ///
    /// Resolves every favorite through the catalog, keeping favorite order.
    /// Ids the catalog no longer knows are left out. Lives outside
    /// `/favorites/` so that no recipe id is shadowed.
    #[oai(path = "/favorite-recipes", method = "get", tag = "ApiTags::Favorites")]
    async fn list_favorite_recipes(&self) -> ListFavoriteRecipesResponse {
        match self.list_recipes_use_case.execute().await {
            Ok(recipes) => ListFavoriteRecipesResponse::Ok(Json(
                recipes.into_iter().map(RecipeSummaryResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => ListFavoriteRecipesResponse::BadGateway(json),
                    _ => ListFavoriteRecipesResponse::InternalError(json),
                }
            }
        }
    }

    /// Check whether a recipe is a favorite
    #[oai(path = "/favorites/:id", method = "get", tag = "ApiTags::Favorites")]
    async fn is_favorite(&self, id: Path<String>) -> IsFavoriteResponse {
        let Some(id) = RecipeId::parse(&id.0) else {
            return IsFavoriteResponse::BadRequest(ErrorResponse::validation(INVALID_ID));
        };

        match self
            .contains_use_case
            .execute(IsFavoriteParams { id: id.clone() })
            .await
        {
            Ok(is_favorite) => IsFavoriteResponse::Ok(Json(FavoriteStatusResponse {
                id: id.into_inner(),
                is_favorite,
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                IsFavoriteResponse::InternalError(json)
            }
        }
    }

    /// Add a recipe to the favorites
    #[oai(path = "/favorites/:id", method = "put", tag = "ApiTags::Favorites")]
    async fn add_favorite(&self, id: Path<String>) -> UpdateFavoritesResponse {
        let Some(id) = RecipeId::parse(&id.0) else {
            return UpdateFavoritesResponse::BadRequest(ErrorResponse::validation(INVALID_ID));
        };

        match self.add_use_case.execute(AddFavoriteParams { id }).await {
            Ok(ids) => UpdateFavoritesResponse::Ok(Json(ids.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateFavoritesResponse::InternalError(json)
            }
        }
    }

    /// Remove a recipe from the favorites
    #[oai(path = "/favorites/:id", method = "delete", tag = "ApiTags::Favorites")]
    async fn remove_favorite(&self, id: Path<String>) -> UpdateFavoritesResponse {
        let Some(id) = RecipeId::parse(&id.0) else {
            return UpdateFavoritesResponse::BadRequest(ErrorResponse::validation(INVALID_ID));
        };

        match self
            .remove_use_case
            .execute(RemoveFavoriteParams { id })
            .await
        {
            Ok(ids) => UpdateFavoritesResponse::Ok(Json(ids.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateFavoritesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListFavoriteRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeSummaryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum IsFavoriteResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteStatusResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateFavoritesResponse {
    #[oai(status = 200)]
    Ok(Json<FavoriteListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use business::application::favorite::add::AddFavoriteUseCaseImpl;
    use business::application::favorite::contains::IsFavoriteUseCaseImpl;
    use business::application::favorite::list::ListFavoritesUseCaseImpl;
    use business::application::favorite::list_recipes::ListFavoriteRecipesUseCaseImpl;
    use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
    use business::domain::logger::Logger;
    use business::domain::recipe::services::RecipeCatalogService;
    use business::domain::storage::KeyValueStore;
    use logger::TracingLogger;
    use mealdb::client::MealDbClient;
    use mealdb::recipe_catalog::RecipeCatalogMealDb;
    use persistence::memory::InMemoryKeyValueStore;

    /// Real use cases over the in-memory store. The catalog points at a
    /// closed port so only `list_favorite_recipes` would ever reach it.
    fn favorite_api() -> FavoriteApi {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let write_lock: Arc<tokio::sync::Mutex<()>> = Arc::default();
        let catalog: Arc<dyn RecipeCatalogService> = Arc::new(RecipeCatalogMealDb::new(
            MealDbClient::new("http://127.0.0.1:9", std::time::Duration::from_secs(2)),
        ));

        FavoriteApi::new(
            Arc::new(ListFavoritesUseCaseImpl {
                storage: storage.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ListFavoriteRecipesUseCaseImpl {
                storage: storage.clone(),
                catalog,
                logger: logger.clone(),
            }),
            Arc::new(AddFavoriteUseCaseImpl {
                storage: storage.clone(),
                logger: logger.clone(),
                write_lock: write_lock.clone(),
            }),
            Arc::new(RemoveFavoriteUseCaseImpl {
                storage: storage.clone(),
                logger: logger.clone(),
                write_lock: write_lock.clone(),
            }),
            Arc::new(IsFavoriteUseCaseImpl { storage, logger }),
        )
    }

    fn favorites_of(response: UpdateFavoritesResponse) -> Vec<String> {
        match response {
            UpdateFavoritesResponse::Ok(Json(body)) => body.favorites,
            _ => panic!("expected updated favorites"),
        }
    }

    #[tokio::test]
    async fn should_return_updated_list_after_add_and_remove() {
        let api = favorite_api();

        favorites_of(api.add_favorite(Path("53049".to_string())).await);
        favorites_of(api.add_favorite(Path("52772".to_string())).await);
        let remaining = favorites_of(api.remove_favorite(Path("53049".to_string())).await);

        assert_eq!(remaining, vec!["52772"]);
        match api.list_favorites().await {
            ListFavoritesResponse::Ok(Json(body)) => {
                assert_eq!(body.favorites, vec!["52772"]);
                assert_eq!(body.count, 1);
            }
            _ => panic!("expected favorites list"),
        }
    }

    #[tokio::test]
    async fn should_report_favorite_status_for_trimmed_id() {
        let api = favorite_api();
        favorites_of(api.add_favorite(Path("52772".to_string())).await);

        match api.is_favorite(Path(" 52772 ".to_string())).await {
            IsFavoriteResponse::Ok(Json(body)) => {
                assert_eq!(body.id, "52772");
                assert!(body.is_favorite);
            }
            _ => panic!("expected favorite status"),
        }
    }

    #[tokio::test]
    async fn should_reject_blank_favorite_id() {
        let api = favorite_api();

        match api.add_favorite(Path("  ".to_string())).await {
            UpdateFavoritesResponse::BadRequest(Json(body)) => {
                assert_eq!(body.name, "ValidationError");
                assert_eq!(body.message, INVALID_ID);
            }
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn should_list_no_favorite_recipes_without_calling_catalog() {
        let api = favorite_api();

        match api.list_favorite_recipes().await {
            ListFavoriteRecipesResponse::Ok(Json(recipes)) => assert!(recipes.is_empty()),
            _ => panic!("expected empty favorites page"),
        }
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_when_catalog_is_unreachable() {
        let api = favorite_api();
        favorites_of(api.add_favorite(Path("52772".to_string())).await);

        let response = api.list_favorite_recipes().await;

        assert!(matches!(
            response,
            ListFavoriteRecipesResponse::BadGateway(_)
        ));
    }

    #[test]
    fn should_not_shadow_any_favorite_id_with_static_routes() {
        let spec = poem_openapi::OpenApiService::new(favorite_api(), "Favorites", "1.0").spec();

        assert!(spec.contains("\"/favorite-recipes\""));
        assert!(spec.contains("\"/favorites/{id}\""));
        assert!(!spec.contains("\"/favorites/recipes\""));
    }
}
