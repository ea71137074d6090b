//! Presentation boundary
//!
//! Handlers produce plain catalog data and hand it to a [`Renderer`]; the
//! renderer alone knows what the pages look like.

mod html;

pub use html::{Escaped, HtmlRenderer};

use carcat_common::catalog::{CarModelSummary, Comparison, Dataset, SearchQuery};
use thiserror::Error;

/// View rendering failure
///
/// Never produced by the catalog queries themselves; surfaced to clients as a
/// generic 500.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to format view: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Turns catalog data into response bodies
pub trait Renderer: Send + Sync {
    /// Landing page with the search form and compare selectors
    fn render_home(&self, dataset: &Dataset) -> Result<String, RenderError>;

    /// Search results listing
    fn render_search_results(
        &self,
        query: &SearchQuery,
        results: &[CarModelSummary],
    ) -> Result<String, RenderError>;

    /// Two car models side by side
    fn render_comparison(&self, comparison: &Comparison) -> Result<String, RenderError>;
}
