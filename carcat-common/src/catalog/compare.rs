//! Side-by-side comparison of two car models

use super::models::{CarModel, Comparison};
use super::store::Dataset;
use crate::error::CompareError;

/// Resolve two submitted identifiers into full car model records
///
/// Both identifiers must be present before either is parsed. The first is then
/// parsed and looked up before the second. Comparing a model with itself is
/// allowed.
pub fn resolve(dataset: &Dataset, id1: &str, id2: &str) -> Result<Comparison, CompareError> {
    if id1.is_empty() || id2.is_empty() {
        return Err(CompareError::MissingSelection);
    }

    let first = lookup(dataset, id1)?;
    let second = lookup(dataset, id2)?;

    Ok(Comparison {
        first: first.clone(),
        second: second.clone(),
    })
}

fn lookup<'a>(dataset: &'a Dataset, raw: &str) -> Result<&'a CarModel, CompareError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| CompareError::InvalidIdentifier(raw.to_string()))?;

    dataset
        .find_car_model(id)
        .ok_or(CompareError::UnknownCarModel(id))
}
