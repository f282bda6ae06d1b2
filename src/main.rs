use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use folio::{config::Config, store::MongoStore, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let store = MongoStore::connect(&config).await;

    let state = Arc::new(AppState {
        config: config.clone(),
        store: Arc::new(store),
    });

    let app = Router::new()
        .route("/", get(folio::read_root))
        .nest("/test", folio::routes::diagnostics::router())
        .nest("/api/profile", folio::routes::profile::router())
        .nest("/api/projects", folio::routes::projects::router())
        .nest("/api/contact", folio::routes::contact::router())
        .merge(folio::swagger::create_swagger_router())
        // Public-read personal site API: all origins, methods, headers.
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
