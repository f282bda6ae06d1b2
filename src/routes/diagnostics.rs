use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{models::TestReport, AppState};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(test_database))
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Store configuration and connectivity report", body = TestReport)
    )
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<TestReport> {
    // Collect status, never propagate: store faults are summarized inside
    // the report by the adapter.
    let diag = state.store.diagnostics().await;
    Json(TestReport::build(&state.config, diag))
}
