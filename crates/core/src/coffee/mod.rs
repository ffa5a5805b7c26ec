mod seed;
mod types;

pub use seed::{seed_coffees, SEED_NAMES};
pub use types::Coffee;
