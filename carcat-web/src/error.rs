//! HTTP-facing error type for carcat-web
//!
//! Translates core error kinds into status codes. Responses are plain text,
//! matching the HTML views rather than a JSON API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carcat_common::CompareError;
use thiserror::Error;
use tracing::{error, warn};

use crate::render::RenderError;

/// Request handling error
#[derive(Debug, Error)]
pub enum ApiError {
    /// Compare form rejected (400)
    #[error(transparent)]
    Compare(#[from] CompareError),

    /// Compare invoked with something other than POST (405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// View could not be produced (500)
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Compare(err) => {
                warn!("Compare rejected: {}", err);
                let message = match err {
                    CompareError::MissingSelection => err.to_string(),
                    CompareError::InvalidIdentifier(_) | CompareError::UnknownCarModel(_) => {
                        "Invalid car model ID".to_string()
                    }
                };
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            ApiError::Render(err) => {
                error!("Internal server error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
