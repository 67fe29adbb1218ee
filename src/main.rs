use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use movie_mood_api::api::{create_router, AppState};
use movie_mood_api::catalog::CatalogStore;
use movie_mood_api::config::Config;
use movie_mood_api::services::contact::Web3FormsRelay;
use movie_mood_api::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Restore catalog state from the snapshot directory
    let store = Arc::new(FileStore::new(&config.data_dir)?);
    let catalog = CatalogStore::load(store);

    let relay = Arc::new(Web3FormsRelay::new(
        config.relay_api_url.clone(),
        config.relay_access_key.clone(),
    ));

    let state = AppState::new(catalog, relay);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
