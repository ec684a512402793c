use std::sync::Arc;

use tracing::info;

use flashdeck_api::config::ApiConfig;
use flashdeck_api::infra::store::JsonStore;
use flashdeck_api::router::build_router;
use flashdeck_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    flashdeck_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    // Refuse to start with missing or corrupt record sets.
    let store = JsonStore::open(&config.data_dir)
        .unwrap_or_else(|e| panic!("failed to load record store: {e:#}"));

    let state = AppState {
        store: Arc::new(store),
        admin: config.admin.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
