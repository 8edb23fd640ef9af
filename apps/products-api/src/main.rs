//! Products API - REST server

use axum::Router;
use axum_helpers::{cors_layer_from_env, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

/// Assemble the full HTTP surface: product routes, health, docs and middleware
fn build_app(config: &Config) -> eyre::Result<Router> {
    let api_routes = api::routes(config.app);
    let cors_layer = cors_layer_from_env(&config.environment)?;
    Ok(create_router::<openapi::ApiDoc>(api_routes, cors_layer))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let app = build_app(&config)?;

    info!(
        app = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Starting Products API on {}",
        config.server.address()
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async {
        info!("Shutting down: in-memory catalog is discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
