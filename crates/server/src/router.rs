//! Route table.

use std::time::Instant;

use axum::body;
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::context::AppContext;
use crate::routes::{self, namespace, resource};
use crate::security;

/// Build the `/api` router over `ctx`.
///
/// `all` and `search` are literal segments, so a GET for them lists or
/// searches. PUT and DELETE on those paths still address a resource with
/// that name.
pub fn api_router(ctx: AppContext) -> Router {
    let enable_ssl = ctx.config().enable_ssl;

    let router = Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/namespace", post(namespace::create))
        .route("/api/namespaces", get(namespace::list))
        .route("/api/resources", get(resource::list_all))
        .route("/api/resource/:namespace", post(resource::create))
        .route(
            "/api/resource/:namespace/all",
            get(resource::list)
                .put(resource::update)
                .delete(resource::delete),
        )
        .route(
            "/api/resource/:namespace/search",
            get(resource::search)
                .put(resource::update)
                .delete(resource::delete),
        )
        .route(
            "/api/resource/:namespace/:name",
            get(resource::get)
                .put(resource::update)
                .delete(resource::delete),
        )
        .fallback(routes::not_found)
        .with_state(ctx)
        .layer(middleware::from_fn(json_errors))
        .layer(middleware::from_fn(log_request));

    if enable_ssl {
        router.layer(middleware::from_fn(security::https_headers))
    } else {
        router
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        target: "bridge::http",
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Largest framework rejection body copied into `details`.
const MAX_REJECTION_BODY: usize = 64 * 1024;

/// Rewrite non-JSON error responses (axum's own 405s and extractor
/// rejections) into `{"error": ..., "details": ...}`.
async fn json_errors(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let details = body::to_bytes(body, MAX_REJECTION_BODY)
        .await
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .filter(|text| !text.is_empty());
    let error = status.canonical_reason().unwrap_or("Request failed");
    let payload = match details {
        Some(details) => json!({"error": error, "details": details}),
        None => json!({"error": error}),
    };

    parts.headers.remove(CONTENT_TYPE);
    parts.headers.remove(CONTENT_LENGTH);
    let mut rewritten = (status, Json(payload)).into_response();
    rewritten.headers_mut().extend(parts.headers);
    rewritten
}
