//! Route handlers.
//!
//! Handlers take the body as raw bytes and do their own JSON parsing so a
//! malformed body becomes a field-level validation error instead of axum's
//! plain-text rejection.

pub(crate) mod namespace;
pub(crate) mod resource;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bridge_executor::{PageRequest, ResourceFilter};
use serde::Serialize;
use serde_json::{json, Value};

/// Parse a request body. Anything that is not JSON reads as `null`.
pub(crate) fn read_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Query string as raw pairs. Extraction never fails, so repeated or
/// unexpected keys cannot turn into a plain-text rejection.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// First value given for `key`.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Lenient integer query value: unparsable input counts as absent.
fn int_param(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// `?page=&per_page=`
#[derive(Debug, Default)]
pub(crate) struct PageParams {
    page: Option<String>,
    per_page: Option<String>,
}

impl PageParams {
    pub(crate) fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first(pairs, "page"),
            per_page: first(pairs, "per_page"),
        }
    }

    pub(crate) fn page_request(&self) -> PageRequest {
        PageRequest::new(int_param(&self.page), int_param(&self.per_page))
    }
}

/// `?name=&arn=&resource_type=&page=&per_page=`
#[derive(Debug, Default)]
pub(crate) struct SearchParams {
    name: Option<String>,
    arn: Option<String>,
    resource_type: Option<String>,
    page: PageParams,
}

impl SearchParams {
    pub(crate) fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            name: first(pairs, "name"),
            arn: first(pairs, "arn"),
            resource_type: first(pairs, "resource_type"),
            page: PageParams::from_pairs(pairs),
        }
    }

    pub(crate) fn into_parts(self) -> (ResourceFilter, PageRequest) {
        let filter = ResourceFilter {
            name: self.name,
            arn: self.arn,
            resource_type: self.resource_type,
        };
        (filter, self.page.page_request())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NamespacesBody {
    pub namespaces: Vec<String>,
}

/// `GET /api/health`
pub(crate) async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Any path without a route.
pub(crate) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"})))
}
