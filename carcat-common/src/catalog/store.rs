//! Dataset store
//!
//! Holds the whole catalog in memory. Built once from the JSON source before the
//! server accepts requests and never mutated afterwards, so it can be shared
//! between request tasks behind a plain `Arc`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use super::models::{CarModel, Category, Manufacturer};
use crate::error::LoadError;

/// Immutable in-memory catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    manufacturers: Vec<Manufacturer>,
    categories: Vec<Category>,
    car_models: Vec<CarModel>,
}

impl Dataset {
    /// Assemble a dataset from already-decoded collections
    pub fn new(
        manufacturers: Vec<Manufacturer>,
        categories: Vec<Category>,
        car_models: Vec<CarModel>,
    ) -> Self {
        Self {
            manufacturers,
            categories,
            car_models,
        }
    }

    /// Read and decode the dataset document at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::decode(&content, path)?;
        info!(
            "Loaded dataset from {}: {} manufacturers, {} categories, {} car models",
            path.display(),
            dataset.manufacturers.len(),
            dataset.categories.len(),
            dataset.car_models.len()
        );
        dataset.log_dangling_manufacturers();
        Ok(dataset)
    }

    /// Decode a dataset document held in memory
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::decode(content, Path::new("<inline>"))
    }

    fn decode(content: &str, path: &Path) -> Result<Self, LoadError> {
        serde_json::from_str(content).map_err(|source| LoadError::Malformed {
            path: PathBuf::from(path),
            source,
        })
    }

    fn log_dangling_manufacturers(&self) {
        for model in &self.car_models {
            if self.find_manufacturer(model.manufacturer_id).is_none() {
                warn!(
                    "Car model {} ({}) references unknown manufacturer {}",
                    model.id, model.name, model.manufacturer_id
                );
            }
        }
    }

    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn car_models(&self) -> &[CarModel] {
        &self.car_models
    }

    /// First manufacturer with the given id
    pub fn find_manufacturer(&self, id: i64) -> Option<&Manufacturer> {
        self.manufacturers.iter().find(|m| m.id == id)
    }

    /// First car model with the given id
    pub fn find_car_model(&self, id: i64) -> Option<&CarModel> {
        self.car_models.iter().find(|c| c.id == id)
    }
}
