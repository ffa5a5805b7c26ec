//! SQLite repository implementation.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use coffeehouse_core::coffee::Coffee;
use coffeehouse_core::storage::{CoffeeRepository, RepositoryError, Result};

use super::conversions::row_to_coffee;
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// `id` is the primary key, so identity is enforced by the store. Every
/// operation is a single statement in autocommit mode.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl CoffeeRepository for SqliteRepository {
    async fn list_all(&self) -> Result<Vec<Coffee>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_COFFEES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_coffee).map_err(wrap_err)?;

                let mut coffees = Vec::new();
                for row_result in rows {
                    coffees.push(row_result.map_err(wrap_err)?);
                }
                Ok(coffees)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>> {
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_COFFEE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id], row_to_coffee) {
                    Ok(coffee) => Ok(Some(coffee)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn save(&self, coffee: Coffee) -> Result<Coffee> {
        let id = coffee.id().to_string();
        let name = coffee.name().to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPSERT_COFFEE, rusqlite::params![id, name])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(coffee)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::EXISTS_COFFEE, [&id], |row| row.get::<_, bool>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_COFFEE, [&id]).map_err(wrap_err)?;
                tracing::trace!(rows, "Deleted coffee rows");
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffeehouse_core::coffee::seed_coffees;
    use uuid::Uuid;

    fn names(coffees: &[Coffee]) -> Vec<&str> {
        coffees.iter().map(|c| c.name()).collect()
    }

    #[tokio::test]
    async fn test_new_in_memory_is_empty() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let coffee = Coffee::with_id("a", "Espresso");

        let saved = repo.save(coffee.clone()).await.unwrap();

        assert_eq!(saved, coffee);
        assert_eq!(repo.find_by_id("a").await.unwrap(), Some(coffee));
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert!(repo.find_by_id("missing").await.unwrap().is_none());
        assert!(!repo.exists_by_id("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_save_existing_is_upsert() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();
        repo.save(Coffee::with_id("b", "Mocha")).await.unwrap();

        repo.save(Coffee::with_id("a", "Latte")).await.unwrap();

        let coffees = repo.list_all().await.unwrap();
        assert_eq!(names(&coffees), ["Latte", "Mocha"]);
        assert_eq!(
            repo.find_by_id("a").await.unwrap(),
            Some(Coffee::with_id("a", "Latte"))
        );
    }

    #[tokio::test]
    async fn test_exists_after_save() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        assert!(repo.exists_by_id("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        repo.delete_by_id("a").await.unwrap();

        assert!(repo.find_by_id("a").await.unwrap().is_none());
        assert!(!repo.exists_by_id("a").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();

        repo.delete_by_id("missing").await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_all_twice_appends() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        repo.save_all(seed_coffees()).await.unwrap();
        repo.save_all(seed_coffees()).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let path = std::env::temp_dir().join(format!("coffeehouse-{}.db", Uuid::new_v4()));
        let path_str = path.to_string_lossy().to_string();

        {
            let repo = SqliteRepository::new(&path_str).await.unwrap();
            repo.save(Coffee::with_id("a", "Espresso")).await.unwrap();
        }

        let reopened = SqliteRepository::new(&path_str).await.unwrap();
        let found = reopened.find_by_id("a").await.unwrap();
        drop(reopened);
        let _ = std::fs::remove_file(&path);

        assert_eq!(found, Some(Coffee::with_id("a", "Espresso")));
    }
}
