use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use mealdb::client::MealDbClient;
use mealdb::recipe_catalog::RecipeCatalogMealDb;
use persistence::file::KeyValueStoreFile;
use persistence::key_value::repository::KeyValueStorePostgres;
use persistence::memory::InMemoryKeyValueStore;

use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::contains::IsFavoriteUseCaseImpl;
use business::application::favorite::list::ListFavoritesUseCaseImpl;
use business::application::favorite::list_recipes::ListFavoriteRecipesUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::random::GetRandomRecipeUseCaseImpl;
use business::application::recipe::search::SearchRecipesUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::recipe::services::RecipeCatalogService;
use business::domain::storage::KeyValueStore;

use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::recipe::routes::RecipeApi;
use crate::config::database_config;
use crate::config::mealdb_config::MealDbConfig;
use crate::config::storage_config::{StorageBackend, StorageConfig};

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub recipe_api: RecipeApi,
    pub favorite_api: FavoriteApi,
}

impl DependencyContainer {
    pub async fn new(storage: &StorageConfig, mealdb: &MealDbConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new(storage.backend.to_string());

        // Infrastructure adapters
        let storage = build_storage(storage).await?;
        let catalog: Arc<dyn RecipeCatalogService> = Arc::new(RecipeCatalogMealDb::new(
            MealDbClient::new(mealdb.base_url.clone(), mealdb.timeout),
        ));

        // Recipe use cases
        let get_by_id_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            catalog: catalog.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchRecipesUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let random_use_case = Arc::new(GetRandomRecipeUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });

        // Favorite use cases; writers share one lock
        let write_lock: Arc<Mutex<()>> = Arc::default();
        let list_use_case = Arc::new(ListFavoritesUseCaseImpl {
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let list_recipes_use_case = Arc::new(ListFavoriteRecipesUseCaseImpl {
            storage: storage.clone(),
            catalog,
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddFavoriteUseCaseImpl {
            storage: storage.clone(),
            logger: logger.clone(),
            write_lock: write_lock.clone(),
        });
        let remove_use_case = Arc::new(RemoveFavoriteUseCaseImpl {
            storage: storage.clone(),
            logger: logger.clone(),
            write_lock: write_lock.clone(),
        });
        let contains_use_case = Arc::new(IsFavoriteUseCaseImpl { storage, logger });

        let recipe_api = RecipeApi::new(get_by_id_use_case, search_use_case, random_use_case);
        let favorite_api = FavoriteApi::new(
            list_use_case,
            list_recipes_use_case,
            add_use_case,
            remove_use_case,
            contains_use_case,
        );

        Ok(Self {
            health_api,
            recipe_api,
            favorite_api,
        })
    }
}

async fn build_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let storage: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => {
            tracing::info!(path = %config.favorites_file.display(), "Using file storage");
            Arc::new(KeyValueStoreFile::new(config.favorites_file.clone()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Using PostgreSQL storage");
            let pool = database_config::init_database().await?;
            Arc::new(KeyValueStorePostgres::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, favorites are lost on restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };
    Ok(storage)
}
