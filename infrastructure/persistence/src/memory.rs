use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

/// Volatile store: contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use super::*;
    use business::application::favorite::add::AddFavoriteUseCaseImpl;
    use business::application::favorite::contains::IsFavoriteUseCaseImpl;
    use business::application::favorite::list::ListFavoritesUseCaseImpl;
    use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
    use business::domain::favorite::model::FAVORITES_KEY;
    use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
    use business::domain::favorite::use_cases::contains::{IsFavoriteParams, IsFavoriteUseCase};
    use business::domain::favorite::use_cases::list::ListFavoritesUseCase;
    use business::domain::favorite::use_cases::remove::{
        RemoveFavoriteParams, RemoveFavoriteUseCase,
    };
    use business::domain::logger::Logger;
    use business::domain::shared::value_objects::RecipeId;
    use logger::TracingLogger;

    /// The four favorites operations wired over one shared store.
    struct Favorites {
        storage: Arc<InMemoryKeyValueStore>,
        list: ListFavoritesUseCaseImpl,
        add: AddFavoriteUseCaseImpl,
        remove: RemoveFavoriteUseCaseImpl,
        contains: IsFavoriteUseCaseImpl,
    }

    impl Favorites {
        fn over(storage: InMemoryKeyValueStore) -> Self {
            let storage = Arc::new(storage);
            let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
            let write_lock: Arc<Mutex<()>> = Arc::default();
            Self {
                storage: storage.clone(),
                list: ListFavoritesUseCaseImpl {
                    storage: storage.clone(),
                    logger: logger.clone(),
                },
                add: AddFavoriteUseCaseImpl {
                    storage: storage.clone(),
                    logger: logger.clone(),
                    write_lock: write_lock.clone(),
                },
                remove: RemoveFavoriteUseCaseImpl {
                    storage: storage.clone(),
                    logger: logger.clone(),
                    write_lock: write_lock.clone(),
                },
                contains: IsFavoriteUseCaseImpl { storage, logger },
            }
        }

        async fn list(&self) -> Vec<String> {
            self.list
                .execute()
                .await
                .unwrap()
                .into_iter()
                .map(RecipeId::into_inner)
                .collect()
        }

        async fn add(&self, id: &str) {
            self.add
                .execute(AddFavoriteParams {
                    id: RecipeId::new(id),
                })
                .await
                .unwrap();
        }

        async fn remove(&self, id: &str) {
            self.remove
                .execute(RemoveFavoriteParams {
                    id: RecipeId::new(id),
                })
                .await
                .unwrap();
        }

        async fn contains(&self, id: &str) -> bool {
            self.contains
                .execute(IsFavoriteParams {
                    id: RecipeId::new(id),
                })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn should_store_and_overwrite_values() {
        let store = InMemoryKeyValueStore::new();

        store.set("k", "1").await.unwrap();
        store.set("k", "2").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_contain_recipe_only_after_it_is_added() {
        let favorites = Favorites::over(InMemoryKeyValueStore::new());

        assert!(!favorites.contains("53049").await);
        favorites.add("53049").await;
        assert!(favorites.contains("53049").await);
    }

    #[tokio::test]
    async fn should_not_duplicate_when_adding_twice() {
        let favorites = Favorites::over(InMemoryKeyValueStore::new());

        favorites.add("53049").await;
        favorites.add("53049").await;

        assert_eq!(favorites.list().await, vec!["53049"]);
    }

    #[tokio::test]
    async fn should_allow_removing_from_empty_favorites() {
        let favorites = Favorites::over(InMemoryKeyValueStore::new());

        favorites.remove("53049").await;

        assert!(favorites.list().await.is_empty());
        assert_eq!(favorites.storage.get(FAVORITES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_list_only_remaining_favorite_after_add_add_remove() {
        let favorites = Favorites::over(InMemoryKeyValueStore::new());

        favorites.add("53049").await;
        favorites.add("52772").await;
        favorites.remove("53049").await;

        assert_eq!(favorites.list().await, vec!["52772"]);
        assert_eq!(
            favorites.storage.get(FAVORITES_KEY).await.unwrap().as_deref(),
            Some(r#"["52772"]"#)
        );
    }

    #[tokio::test]
    async fn should_list_nothing_when_storage_holds_invalid_data() {
        let favorites = Favorites::over(InMemoryKeyValueStore::with_entries([(
            FAVORITES_KEY,
            "<<not json>>",
        )]));

        assert!(favorites.list().await.is_empty());
        assert!(!favorites.contains("53049").await);
    }

    #[tokio::test]
    async fn should_read_favorites_written_by_previous_session() {
        let favorites = Favorites::over(InMemoryKeyValueStore::with_entries([(
            FAVORITES_KEY,
            r#"["52959","52819"]"#,
        )]));

        assert_eq!(favorites.list().await, vec!["52959", "52819"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_not_lose_updates_when_adds_and_removes_interleave() {
        let favorites = Arc::new(Favorites::over(InMemoryKeyValueStore::with_entries([(
            FAVORITES_KEY,
            r#"["1","2","3","4","5"]"#,
        )])));

        let mut handles = Vec::new();
        for i in 1..=5 {
            let remover = favorites.clone();
            handles.push(tokio::spawn(async move {
                remover.remove(&i.to_string()).await;
            }));
            let adder = favorites.clone();
            handles.push(tokio::spawn(async move {
                adder.add(&(i + 100).to_string()).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut remaining = favorites.list().await;
        remaining.sort();
        assert_eq!(remaining, vec!["101", "102", "103", "104", "105"]);
    }
}
