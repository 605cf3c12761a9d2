use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

use config::settings::AppConfig;
use infrastructure::cache::thumbnails::ThumbnailCache;
use infrastructure::db::pool;
use infrastructure::storage::local::AssetStorage;
use modules::video::repository::VideoRepository;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("Missing required configuration")?;

    let db = pool::connect_to_db(&config.database_url).await?;
    pool::run_migrations(&db).await?;

    let assets = AssetStorage::new(config.assets_root.clone());
    assets
        .ensure_root()
        .await
        .context("Couldn't create assets directory")?;

    let port = config.server_port;
    let state = AppState::new(
        config,
        Arc::new(VideoRepository::new(db)),
        ThumbnailCache::new(),
        assets,
    );

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
