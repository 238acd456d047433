use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let logger = Logger::new("apigateway", config.is_dev);

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_max_connections,
        config.run_migrations,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(pool).await;

    info!("🚀 Server starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("👋 Shutting down server...");

    logger.shutdown();

    Ok(())
}
