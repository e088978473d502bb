//! Namespace routes.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bridge_executor::CreateNamespaceRequest;

use super::{read_json, MessageBody, NamespacesBody};
use crate::context::AppContext;
use crate::error::ApiError;

/// `POST /api/namespace`
pub(crate) async fn create(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let request = CreateNamespaceRequest::from_json(&read_json(&body));
    let message = ctx
        .run(move |registry| registry.create_namespace_with(request))
        .await?;
    Ok((StatusCode::CREATED, Json(MessageBody { message })))
}

/// `GET /api/namespaces`
pub(crate) async fn list(State(ctx): State<AppContext>) -> Result<Json<NamespacesBody>, ApiError> {
    let namespaces = ctx.run(|registry| registry.list_namespaces()).await?;
    Ok(Json(NamespacesBody { namespaces }))
}
