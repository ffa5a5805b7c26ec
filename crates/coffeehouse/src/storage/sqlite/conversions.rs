//! SQLite row conversion functions.

use coffeehouse_core::coffee::Coffee;
use rusqlite::Row;

/// Convert a SQLite row to a Coffee.
///
/// Expected columns: id, name
pub fn row_to_coffee(row: &Row) -> rusqlite::Result<Coffee> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;

    Ok(Coffee::with_id(id, name))
}
