//! # Car Catalog Common Library
//!
//! Shared code for the car catalog service:
//! - Catalog entities and the immutable dataset store
//! - Search and compare queries over the dataset
//! - Bootstrap configuration resolution
//! - Error types

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::Dataset;
pub use error::{CompareError, Error, LoadError, Result};
