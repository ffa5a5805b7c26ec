//! Storage backend implementations.
//!
//! Concrete implementations of `coffeehouse_core::storage::CoffeeRepository`.
//! The backend is picked at startup from [`crate::config::Config`]:
//!
//! - `inmemory` (default): a vector owned by the process, lost on restart
//! - `sqlite`: a SQLite database file using `rusqlite` and `tokio-rusqlite`

pub mod inmemory;
pub mod sqlite;

pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
