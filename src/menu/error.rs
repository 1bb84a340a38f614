//! Menu error type and its HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures a menu operation can signal.
///
/// Both kinds are answered with a bare status code; the message only ever
/// reaches the logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    #[error("menu item not found: {0}")]
    NotFound(i64),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    pub fn status(&self) -> StatusCode {
        match self {
            MenuError::NotFound(_) => StatusCode::NOT_FOUND,
            MenuError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request failed");
        self.status().into_response()
    }
}

impl From<JsonRejection> for MenuError {
    fn from(rejection: JsonRejection) -> Self {
        MenuError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for MenuError {
    fn from(rejection: PathRejection) -> Self {
        MenuError::InvalidInput(rejection.body_text())
    }
}
