//! Catalog entities as they appear in the dataset document

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub founding_year: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Technical data embedded in a car model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    pub engine: String,
    pub horsepower: i64,
    pub transmission: String,
    pub drivetrain: String,
}

/// Canonical car model record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: i64,
    pub name: String,
    pub manufacturer_id: i64,
    pub category_id: i64,
    pub year: i64,
    pub specifications: Specifications,
    /// Image filename, relative to the images root
    pub image: String,
}

/// Search result: a car model with its manufacturer denormalized onto it
///
/// Read-only projection built per request. Never written back into the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModelSummary {
    #[serde(flatten)]
    pub model: CarModel,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
    pub manufacturer_founding_year: i64,
}

impl CarModelSummary {
    /// Attach manufacturer fields; `None` leaves them at zero values
    pub fn new(model: &CarModel, manufacturer: Option<&Manufacturer>) -> Self {
        let manufacturer = manufacturer.cloned().unwrap_or_default();
        Self {
            model: model.clone(),
            manufacturer_name: manufacturer.name,
            manufacturer_country: manufacturer.country,
            manufacturer_founding_year: manufacturer.founding_year,
        }
    }
}

/// Two car models placed side by side, in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub first: CarModel,
    pub second: CarModel,
}
