//! Resource routes.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bridge_executor::{
    CreateResourceRequest, Error, Page, Resource, UpdateResourceRequest,
};

use super::{read_json, MessageBody, PageParams, QueryPairs, SearchParams};
use crate::context::AppContext;
use crate::error::ApiError;

/// `POST /api/resource/:namespace`
pub(crate) async fn create(
    State(ctx): State<AppContext>,
    Path(namespace): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Resource>), ApiError> {
    let request = CreateResourceRequest::from_json(&read_json(&body)).map_err(Error::from)?;
    let resource = ctx
        .run(move |registry| registry.create_resource(&namespace, request))
        .await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// `GET /api/resource/:namespace/:name`
pub(crate) async fn get(
    State(ctx): State<AppContext>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<Resource>, ApiError> {
    let resource = ctx
        .run(move |registry| registry.get_resource(&namespace, &name))
        .await?;
    Ok(Json(resource))
}

/// `GET /api/resource/:namespace/all`
pub(crate) async fn list(
    State(ctx): State<AppContext>,
    Path(namespace): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Page<Resource>>, ApiError> {
    let page = PageParams::from_pairs(&pairs).page_request();
    let page = ctx
        .run(move |registry| registry.list_resources(&namespace, page))
        .await?;
    Ok(Json(page))
}

/// `PUT /api/resource/:namespace/:name`
pub(crate) async fn update(
    State(ctx): State<AppContext>,
    Path((namespace, name)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Resource>, ApiError> {
    let request = UpdateResourceRequest::from_json(&read_json(&body)).map_err(Error::from)?;
    let resource = ctx
        .run(move |registry| registry.update_resource(&namespace, &name, request))
        .await?;
    Ok(Json(resource))
}

/// `DELETE /api/resource/:namespace/:name`
pub(crate) async fn delete(
    State(ctx): State<AppContext>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<MessageBody>, ApiError> {
    let message = ctx
        .run(move |registry| registry.delete_resource(&namespace, &name))
        .await?;
    Ok(Json(MessageBody { message }))
}

/// `GET /api/resource/:namespace/search`
pub(crate) async fn search(
    State(ctx): State<AppContext>,
    Path(namespace): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Page<Resource>>, ApiError> {
    let (filter, page) = SearchParams::from_pairs(&pairs).into_parts();
    let page = ctx
        .run(move |registry| registry.search_resources(&namespace, filter, page))
        .await?;
    Ok(Json(page))
}

/// `GET /api/resources`
pub(crate) async fn list_all(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let resources = ctx.run(|registry| registry.list_all_resources()).await?;
    Ok(Json(resources))
}
