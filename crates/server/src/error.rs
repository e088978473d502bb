//! Error types for the HTTP layer.
//!
//! [`ApiError`] is the single place where registry errors become status
//! codes and JSON bodies. [`ServerError`] covers startup failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bridge_executor::Error;
use serde_json::{json, Value};

use crate::config::ConfigError;

/// A registry error on its way to the client.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    /// Status code and JSON body for this error.
    pub fn status_and_body(&self) -> (StatusCode, Value) {
        match &self.0 {
            Error::Validation { messages } => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid data", "messages": messages}),
            ),
            Error::NamespaceRequired => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Namespace is required"}),
            ),
            Error::NamespaceExists { .. } => (
                StatusCode::CONFLICT,
                json!({"error": "Namespace already exists"}),
            ),
            Error::ResourceExists { .. } => (
                StatusCode::CONFLICT,
                json!({"error": "Resource with this name already exists"}),
            ),
            Error::NamespaceNotFound { .. } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Namespace does not exist"}),
            ),
            Error::ResourceNotFound { namespace, name } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": format!(
                        "Resource with name {} does not exist in namespace {}",
                        name, namespace
                    )
                }),
            ),
            Error::Integrity { reason } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Database integrity error", "details": reason}),
            ),
            Error::Io { reason } | Error::Internal { reason } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": format!("Internal Server Error: {}", reason)}),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(target: "bridge::http", status = status.as_u16(), error = %self.0, "request failed");
        } else {
            tracing::warn!(target: "bridge::http", status = status.as_u16(), error = %self.0, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}

/// Failures that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The registry could not be opened.
    #[error("failed to open registry: {0}")]
    Registry(#[from] Error),

    /// TLS certificate or key could not be loaded.
    #[error("failed to load TLS material: {0}")]
    Tls(#[source] std::io::Error),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
