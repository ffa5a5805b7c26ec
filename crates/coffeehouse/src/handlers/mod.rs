pub mod coffees;
pub mod error;
pub mod health;

pub use error::AppError;
