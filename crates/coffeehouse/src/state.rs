//! Application state with repository-based storage.
//!
//! The shared state handed to every request handler. Storage is a
//! `CoffeeRepository` trait object, so handlers do not know which backend
//! is active.

use std::sync::Arc;

use coffeehouse_core::storage::CoffeeRepository;

use crate::{
    config::{Config, StorageBackend},
    seed::load_seed_data,
    storage::{InMemoryRepository, SqliteRepository},
};

/// Shared application state.
///
/// Cloned for each request handler; clones share the same repository.
#[derive(Clone)]
pub struct AppState {
    pub coffee_repo: Arc<dyn CoffeeRepository>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(coffee_repo: Arc<dyn CoffeeRepository>) -> Self {
        Self { coffee_repo }
    }

    /// Creates AppState with the backend selected in the configuration.
    ///
    /// The in-memory backend is seeded at construction. The SQLite backend
    /// runs the seed loader once against the opened database.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let coffee_repo: Arc<dyn CoffeeRepository> = match config.storage {
            StorageBackend::InMemory => {
                if config.seed_data {
                    Arc::new(InMemoryRepository::with_seed_data())
                } else {
                    Arc::new(InMemoryRepository::new())
                }
            }
            StorageBackend::Sqlite => {
                let repo = SqliteRepository::new(&config.sqlite_path).await?;
                if config.seed_data {
                    load_seed_data(&repo).await?;
                }
                Arc::new(repo)
            }
        };

        tracing::info!(
            backend = %config.storage,
            seed_data = config.seed_data,
            "Initialized coffee repository"
        );

        Ok(Self::with_repository(coffee_repo))
    }
}

impl Default for AppState {
    /// Creates an AppState over an empty in-memory repository.
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()))
    }
}
