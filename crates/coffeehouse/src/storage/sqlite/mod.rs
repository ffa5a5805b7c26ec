//! SQLite storage backend implementation.
//!
//! Implements the coffee repository using `rusqlite` for synchronous
//! operations and `tokio-rusqlite` for async wrapping. The `coffees` table
//! is created on open if it does not exist yet.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
