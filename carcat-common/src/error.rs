//! Common error types for the car catalog

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by catalog crates
///
/// Dataset loading reports [`LoadError`] on its own; it is fatal at startup
/// and never mixed with runtime errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Dataset load failure
///
/// Fatal: only raised before the HTTP listener starts.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Source file missing or unreadable
    #[error("Dataset source {path} is unreadable: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source does not match the expected document shape
    #[error("Dataset source {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Compare request rejected by validation
///
/// Every variant is a client error; the dataset is never affected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// One or both identifiers were empty
    #[error("Please select exactly two car models to compare")]
    MissingSelection,

    /// Identifier is not an integer
    #[error("Invalid car model ID: {0:?} is not a number")]
    InvalidIdentifier(String),

    /// Identifier parsed but no car model carries it
    #[error("Invalid car model ID: {0} does not exist")]
    UnknownCarModel(i64),
}
