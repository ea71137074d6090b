//! In-memory catalog: entities, dataset store and the two read-only queries

pub mod compare;
pub mod models;
pub mod search;
pub mod store;

pub use compare::resolve;
pub use models::*;
pub use search::{search, SearchQuery};
pub use store::Dataset;
