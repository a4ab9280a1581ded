//! Products API - in-memory catalog over HTTP

use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Initialize the application state
    let state = AppState::seeded(config);
    info!(
        id_policy = %state.config.catalog.id_policy,
        images_enabled = state.config.catalog.images_enabled,
        "Catalog seeded"
    );

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!("Starting Products API on port {}", state.config.server.port);

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
