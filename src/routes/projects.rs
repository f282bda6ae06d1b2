use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use mongodb::bson::{doc, from_document, to_document};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::{CreatedResponse, Project},
    store::collections,
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_projects).post(add_project))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All project records, store-native order", body = Vec<Project>)
    )
)]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let docs = state
        .store
        .get_documents(collections::PROJECT, doc! {}, None)
        .await?;

    let projects = docs
        .into_iter()
        .map(from_document::<Project>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::internal_server_error(format!("corrupt project record: {}", e)))?;

    Ok(Json(projects))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = Project,
    responses(
        (status = 200, description = "Project stored", body = CreatedResponse),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn add_project(
    State(state): State<Arc<AppState>>,
    Json(project): Json<Project>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let document = to_document(&project)
        .map_err(|e| ApiError::internal_server_error(format!("unserializable project: {}", e)))?;

    let id = state
        .store
        .create_document(collections::PROJECT, document)
        .await?;

    Ok(Json(CreatedResponse { id }))
}
