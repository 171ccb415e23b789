mod config;
mod db;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;

    let pool = db::init_pool(&config.database_url, config.db_max_connections, config.run_migrations)
        .await
        .expect("database init failed");
    let store = Arc::new(services::gallery::PgGalleryStore::new(pool));
    let state = state::AppState::new(store, config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "herowall listening");
    axum::serve(listener, app).await.expect("server failed");
}
