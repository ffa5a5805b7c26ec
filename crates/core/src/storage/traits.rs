use async_trait::async_trait;

use crate::coffee::Coffee;

use super::Result;

/// Repository for coffee operations.
///
/// Coffees are keyed by their string id. Absence is a normal outcome:
/// lookups return `None` and deletes of unknown ids succeed.
#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// Lists every stored coffee.
    async fn list_all(&self) -> Result<Vec<Coffee>>;

    /// Gets a coffee by its ID.
    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>>;

    /// Inserts the coffee, or fully replaces the one stored under the same ID.
    ///
    /// Returns the coffee as it was stored.
    async fn save(&self, coffee: Coffee) -> Result<Coffee>;

    /// Returns true if a coffee with this ID is stored.
    async fn exists_by_id(&self, id: &str) -> Result<bool>;

    /// Deletes the coffee with this ID, if any.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Saves each coffee in order, stopping at the first failure.
    async fn save_all(&self, coffees: Vec<Coffee>) -> Result<Vec<Coffee>> {
        let mut saved = Vec::with_capacity(coffees.len());
        for coffee in coffees {
            saved.push(self.save(coffee).await?);
        }
        Ok(saved)
    }
}
