//! Catalog API - REST server for the 3D-printing marketplace catalog

use axum_helpers::server::health_router;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = if config.environment.is_development() {
        info!("Development environment: seeding catalog fixtures");
        AppState::seeded(config)
    } else {
        AppState::new(config)
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting Catalog API on port {}",
        state.config.server.port
    );

    axum_helpers::create_app(app, &state.config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
