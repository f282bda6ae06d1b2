use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use mongodb::bson::to_document;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::{ContactMessage, ContactReceivedResponse},
    store::collections,
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(submit_contact))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message stored", body = ContactReceivedResponse),
        (status = 422, description = "Malformed payload or invalid email")
    )
)]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<ContactReceivedResponse>, ApiError> {
    let document = to_document(&message)
        .map_err(|e| ApiError::internal_server_error(format!("unserializable message: {}", e)))?;

    let id = state
        .store
        .create_document(collections::CONTACT_MESSAGE, document)
        .await?;

    Ok(Json(ContactReceivedResponse {
        id,
        status: "received".to_string(),
    }))
}
