use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use mongodb::bson::{doc, from_document, to_document, DateTime};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::{Profile, ProfileUpsertResponse},
    store::{collections, UpsertOutcome},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_profile).post(create_or_update_profile))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Zero or one profile record", body = Vec<Profile>)
    )
)]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let docs = state
        .store
        .get_documents(collections::PROFILE, doc! {}, Some(1))
        .await?;

    let profiles = docs
        .into_iter()
        .map(from_document::<Profile>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::internal_server_error(format!("corrupt profile record: {}", e)))?;

    Ok(Json(profiles))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body = Profile,
    responses(
        (status = 200, description = "Profile created or updated in place", body = ProfileUpsertResponse),
        (status = 500, description = "Store not configured")
    )
)]
pub async fn create_or_update_profile(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<Profile>,
) -> Result<Json<ProfileUpsertResponse>, ApiError> {
    let mut fields = to_document(&profile)
        .map_err(|e| ApiError::internal_server_error(format!("unserializable profile: {}", e)))?;
    fields.insert("updated_at", DateTime::now());

    // Single atomic upsert keyed by a fixed marker, so two concurrent posts
    // cannot both insert.
    let outcome = state
        .store
        .upsert_document(collections::PROFILE, doc! { "singleton": true }, fields)
        .await?;

    let response = match outcome {
        UpsertOutcome::Created(id) => ProfileUpsertResponse {
            status: "created".to_string(),
            id: Some(id),
        },
        UpsertOutcome::Updated => ProfileUpsertResponse {
            status: "updated".to_string(),
            id: None,
        },
    };

    Ok(Json(response))
}
