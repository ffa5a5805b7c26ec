//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the coffees table.
///
/// Rows keep their implicit `rowid`, which records insertion order.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS coffees (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
);
"#;

pub const SELECT_ALL_COFFEES: &str = r#"
SELECT id, name
FROM coffees
ORDER BY rowid ASC
"#;

pub const SELECT_COFFEE_BY_ID: &str = r#"
SELECT id, name
FROM coffees
WHERE id = ?1
"#;

/// Insert-or-replace keyed by id. Updating in place keeps the original rowid.
pub const UPSERT_COFFEE: &str = r#"
INSERT INTO coffees (id, name)
VALUES (?1, ?2)
ON CONFLICT(id) DO UPDATE SET name = excluded.name
"#;

pub const EXISTS_COFFEE: &str = r#"
SELECT EXISTS(SELECT 1 FROM coffees WHERE id = ?1)
"#;

pub const DELETE_COFFEE: &str = r#"
DELETE FROM coffees
WHERE id = ?1
"#;
