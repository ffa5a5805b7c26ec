//! Startup seed loader.
//!
//! Saves the sample coffees into a repository. It runs once when the process
//! starts and always inserts: each run adds three new coffees with fresh ids,
//! so a persistent store grows by three rows per startup.

use coffeehouse_core::coffee::{seed_coffees, Coffee};
use coffeehouse_core::storage::{CoffeeRepository, Result};

/// Saves the sample coffees and returns what was stored.
pub async fn load_seed_data(repo: &dyn CoffeeRepository) -> Result<Vec<Coffee>> {
    let saved = repo.save_all(seed_coffees()).await?;

    tracing::info!(count = saved.len(), "Loaded seed coffees");

    Ok(saved)
}
