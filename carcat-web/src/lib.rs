//! carcat-web library - car catalog HTTP service
//!
//! Serves the landing page, search results and side-by-side comparison views
//! over a dataset loaded once at startup, plus the car images.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use carcat_common::Dataset;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod render;

use render::{HtmlRenderer, Renderer};

/// Application state shared across HTTP handlers
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Catalog snapshot loaded at startup
    pub dataset: Arc<Dataset>,
    /// Presentation boundary used by the view handlers
    pub renderer: Arc<dyn Renderer>,
    /// Directory served under `/img`
    pub images_dir: PathBuf,
}

impl AppState {
    /// Create new application state with the HTML renderer
    pub fn new(dataset: Dataset, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            renderer: Arc::new(HtmlRenderer::new()),
            images_dir: images_dir.into(),
        }
    }

    /// Swap the renderer
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let images = ServeDir::new(&state.images_dir);

    Router::new()
        .route("/", get(api::home))
        .route("/search", get(api::search))
        .route(
            "/compare",
            post(api::compare).fallback(api::compare_method_not_allowed),
        )
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .nest_service("/img", images)
        // Any other path shows the landing page
        .fallback(api::home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
