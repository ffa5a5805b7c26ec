//! In-memory storage backend.
//!
//! Keeps coffees in a `Vec` wrapped in `Arc<RwLock<_>>`, preserving insertion
//! order. Nothing survives a restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use coffeehouse::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_seed_data();
//! ```

mod repository;

pub use repository::InMemoryRepository;
