use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    routing::get,
    Router,
};
use tower::util::ServiceExt;

use crate::{
    config::Config,
    store::{DocumentStore, MemoryStore, MongoStore},
    AppState,
};

pub fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        database_url: None,
        database_name: None,
    }
}

fn build_app(config: Config, store: Arc<dyn DocumentStore>) -> Router {
    let state = Arc::new(AppState { config, store });

    Router::new()
        .route("/", get(crate::read_root))
        .nest("/test", crate::routes::diagnostics::router())
        .nest("/api/profile", crate::routes::profile::router())
        .nest("/api/projects", crate::routes::projects::router())
        .nest("/api/contact", crate::routes::contact::router())
        .with_state(state)
}

/// Router wired to a fresh in-memory store, plus a handle on that store for
/// asserting on persisted documents directly.
pub fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_app(test_config(), store.clone());
    (app, store)
}

/// Router wired to a MongoStore built from empty configuration, i.e. the
/// degraded "store unavailable" state. No database is contacted.
pub async fn create_unconfigured_app() -> Router {
    let config = test_config();
    let store = MongoStore::connect(&config).await;
    build_app(config, Arc::new(store))
}

pub async fn send_get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = send_get(app, uri).await;
    let status = response.status();
    (status, read_json(response).await)
}
