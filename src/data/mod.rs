//! Data layer module
//!
//! Holds the in-memory state:
//! - Domain models and the session
//! - `Records`: collections, low-level CRUD, id sequences
//! - Seed fixture (built-in or JSON file)

mod models;
mod records;
mod seed;

pub use models::*;
pub use records::Records;
pub use seed::SeedData;
