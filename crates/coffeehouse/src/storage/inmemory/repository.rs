//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use coffeehouse_core::coffee::{seed_coffees, Coffee};
use coffeehouse_core::storage::{CoffeeRepository, Result};

/// In-memory storage backend.
///
/// Uses a `Vec` wrapped in `Arc<RwLock<_>>` so clones share the same list.
/// Lookups scan linearly. Each operation holds the lock for its whole
/// duration, but sequences of operations are not atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    coffees: Arc<RwLock<Vec<Coffee>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the sample coffees.
    pub fn with_seed_data() -> Self {
        Self::from_coffees(seed_coffees())
    }

    /// Creates a repository holding the given coffees, in order.
    pub fn from_coffees(coffees: Vec<Coffee>) -> Self {
        Self {
            coffees: Arc::new(RwLock::new(coffees)),
        }
    }
}

#[async_trait]
impl CoffeeRepository for InMemoryRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>> {
        let coffees = self.coffees.read().await;
        Ok(coffees.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>> {
        let coffees = self.coffees.read().await;
        Ok(coffees.iter().find(|c| c.id() == id).cloned())
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee> {
        let mut coffees = self.coffees.write().await;
        match coffees.iter_mut().find(|c| c.id() == coffee.id()) {
            Some(existing) => *existing = coffee.clone(),
            None => coffees.push(coffee.clone()),
        }
        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let coffees = self.coffees.read().await;
        Ok(coffees.iter().any(|c| c.id() == id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut coffees = self.coffees.write().await;
        coffees.retain(|c| c.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeehouse_core::coffee::SEED_NAMES;

    fn names(coffees: &[Coffee]) -> Vec<&str> {
        coffees.iter().map(|c| c.name()).collect()
    }

    #[tokio::test]
    async fn test_new_is_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_seed_data_holds_sample_coffees() {
        let repo = InMemoryRepository::with_seed_data();
        let coffees = repo.list_all().await.unwrap();

        assert_eq!(names(&coffees), SEED_NAMES);
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryRepository::new();
        let coffee = Coffee::with_id("a", "Espresso");

        let saved = repo.save(coffee.clone()).await.unwrap();

        assert_eq!(saved, coffee);
        assert_eq!(repo.find_by_id("a").await.unwrap(), Some(coffee));
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let repo = InMemoryRepository::with_seed_data();

        assert!(repo.find_by_id("missing").await.unwrap().is_none());
        assert!(!repo.exists_by_id("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = InMemoryRepository::new();
        for (id, name) in [("3", "Mocha"), ("1", "Latte"), ("2", "Cortado")] {
            repo.save(Coffee::with_id(id, name)).await.unwrap();
        }

        let coffees = repo.list_all().await.unwrap();
        assert_eq!(names(&coffees), ["Mocha", "Latte", "Cortado"]);
    }

    #[tokio::test]
    async fn test_save_existing_replaces_in_place() {
        let repo = InMemoryRepository::from_coffees(vec![
            Coffee::with_id("a", "Espresso"),
            Coffee::with_id("b", "Americano"),
            Coffee::with_id("c", "Mocha"),
        ]);

        repo.save(Coffee::with_id("b", "Flat White")).await.unwrap();

        let coffees = repo.list_all().await.unwrap();
        assert_eq!(names(&coffees), ["Espresso", "Flat White", "Mocha"]);
    }

    #[tokio::test]
    async fn test_exists_after_save() {
        let repo = InMemoryRepository::new();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        assert!(repo.exists_by_id("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRepository::new();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        repo.delete_by_id("a").await.unwrap();

        assert!(repo.find_by_id("a").await.unwrap().is_none());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let repo = InMemoryRepository::with_seed_data();

        repo.delete_by_id("missing").await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 3);
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_all_duplicates() {
        let repo = InMemoryRepository::from_coffees(vec![
            Coffee::with_id("a", "Espresso"),
            Coffee::with_id("b", "Mocha"),
            Coffee::with_id("a", "Espresso again"),
        ]);

        repo.delete_by_id("a").await.unwrap();

        let coffees = repo.list_all().await.unwrap();
        assert_eq!(names(&coffees), ["Mocha"]);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();

        other.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        assert!(repo.exists_by_id("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_all_appends_fresh_coffees() {
        let repo = InMemoryRepository::with_seed_data();

        repo.save_all(seed_coffees()).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 6);
    }
}
