//! Functional core for the coffeehouse service.
//!
//! Holds the `Coffee` entity, the seed catalogue and the repository contract.
//! Nothing in here performs I/O; storage backends live in the `coffeehouse`
//! binary crate.

pub mod coffee;
pub mod storage;
