pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod store;
pub mod swagger;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::Json;
use config::Config;
use store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
}

/// Root liveness endpoint; answers regardless of store state.
pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "folio backend is running"}))
}
