//! Sample coffees used to populate an empty service.
//!
//! Pure data: callers decide where the coffees end up.

use super::types::Coffee;

/// Names of the sample coffees, in insertion order.
pub const SEED_NAMES: [&str; 3] = ["Espresso", "Americano", "Vanilla Latte"];

/// Builds the sample coffees, each with a freshly generated id.
///
/// Every call produces new ids, so saving the result twice stores six coffees.
///
/// # Example
///
/// ```
/// use coffeehouse_core::coffee::seed_coffees;
///
/// let coffees = seed_coffees();
/// assert_eq!(coffees.len(), 3);
/// assert_eq!(coffees[0].name(), "Espresso");
/// ```
pub fn seed_coffees() -> Vec<Coffee> {
    SEED_NAMES.iter().map(|name| Coffee::new(*name)).collect()
}
