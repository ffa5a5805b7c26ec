use std::{env, fmt, str::FromStr};

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Coffees live in a vector owned by the process.
    #[default]
    InMemory,
    /// Coffees are stored in a SQLite database file.
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inmemory" | "memory" => Ok(Self::InMemory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => write!(f, "inmemory"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: in-memory)
    pub storage: StorageBackend,
    /// Path to SQLite database file (default: "coffeehouse.db")
    pub sqlite_path: String,
    /// Whether to load the sample coffees on startup (default: true)
    pub seed_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - `inmemory` or `sqlite` (default: `inmemory`)
    /// - `SQLITE_PATH` - SQLite database path (default: "coffeehouse.db")
    /// - `SEED_DATA` - Load sample coffees on startup (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let storage = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Falling back to the in-memory backend");
                StorageBackend::default()
            }),
            None => StorageBackend::default(),
        };

        Self {
            storage,
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "coffeehouse.db".to_string()),
            seed_data: lookup("SEED_DATA")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
