//! # Web Errors
//!
//! The handler-side error type. Unknown-id outcomes never reach this type:
//! handlers turn them into the rendered 404 page before propagating. What
//! remains here is either a rendering defect or a store channel failure,
//! both of which map to a plain 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use item_store::StoreError;
use tracing::error;

/// Failures a page handler can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
