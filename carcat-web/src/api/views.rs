//! Catalog views: home, search and compare
//!
//! Each handler runs one catalog query against the shared dataset and passes
//! the result to the renderer.

use axum::{
    extract::{Query, State},
    http::Method,
    response::Html,
    Form,
};
use carcat_common::catalog::{self, SearchQuery};
use tracing::{debug, warn};

use super::params::FormValues;
use crate::error::ApiError;
use crate::AppState;

/// GET /
///
/// Landing page listing every car model in the compare selectors
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let body = state.renderer.render_home(&state.dataset)?;
    Ok(Html(body))
}

/// GET /search?q=TEXT&year=YEAR
///
/// Both parameters are optional and default to empty. Repeated parameters
/// use their first value.
pub async fn search(
    State(state): State<AppState>,
    query: Query<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let params = FormValues::from_query(query);
    let query = SearchQuery::new(params.first("q"), params.first("year"));

    let results = catalog::search(&state.dataset, &query);
    debug!(
        "Search q={:?} year={:?} matched {} car model(s)",
        query.text,
        query.year,
        results.len()
    );

    let body = state.renderer.render_search_results(&query, &results)?;
    Ok(Html(body))
}

/// POST /compare
///
/// `carModelID1`, `carModelID2` from the form body or the query string; body
/// fields take precedence and the first value of a repeated key is used. A
/// body that is not a form contributes nothing.
pub async fn compare(
    State(state): State<AppState>,
    query: Query<Vec<(String, String)>>,
    form: Option<Form<Vec<(String, String)>>>,
) -> Result<Html<String>, ApiError> {
    let params = FormValues::from_form(form, query);

    let comparison = catalog::resolve(
        &state.dataset,
        params.first("carModelID1"),
        params.first("carModelID2"),
    )?;
    debug!(
        "Comparing car models {} and {}",
        comparison.first.id, comparison.second.id
    );

    let body = state.renderer.render_comparison(&comparison)?;
    Ok(Html(body))
}

/// Any method other than POST on /compare
pub async fn compare_method_not_allowed(method: Method) -> ApiError {
    warn!("Rejected {} /compare", method);
    ApiError::MethodNotAllowed
}
