use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use earnings_config::ConfigError;
use earnings_core::CoreError;
use serde_json::json;
use thiserror::Error;

/// Error type for the HTTP server and the command line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::Validation(_)) | AppError::Usage(_) => StatusCode::BAD_REQUEST,
            AppError::Core(CoreError::NoData { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
