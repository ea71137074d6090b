//! Car model search
//!
//! Case-insensitive substring match on the model name, optionally narrowed to
//! one model year. Each hit is returned as a [`CarModelSummary`] carrying its
//! manufacturer's name, country and founding year.

use super::models::CarModelSummary;
use super::store::Dataset;

/// Search parameters as submitted by the search form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text matched against model names
    pub text: String,

    /// Exact model year; empty means any year
    ///
    /// Compared as a string against the decimal rendering of the year, so a
    /// non-numeric filter matches nothing rather than being rejected.
    pub year: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            year: year.into(),
        }
    }
}

/// Return matching car models in dataset order
pub fn search(dataset: &Dataset, query: &SearchQuery) -> Vec<CarModelSummary> {
    let needle = query.text.to_lowercase();

    dataset
        .car_models()
        .iter()
        .filter(|model| model.name.to_lowercase().contains(&needle))
        .filter(|model| query.year.is_empty() || model.year.to_string() == query.year)
        .map(|model| CarModelSummary::new(model, dataset.find_manufacturer(model.manufacturer_id)))
        .collect()
}
