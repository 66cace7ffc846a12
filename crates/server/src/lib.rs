pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use banner::print_banner;
pub use config::{Config, Environment};
pub use db::create_pool;
pub use error::{AppError, AppResult};
pub use services::{CustomerError, CustomerService, ServiceResult};
pub use state::AppState;

/// Assemble the full application: API routes, docs UI and request tracing
pub fn build_app(state: AppState) -> Router {
    let (router, api) = create_router(state);

    router
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(addr: SocketAddr, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting in {:?} environment", config.env);

    // Ensure data directory exists
    std::fs::create_dir_all(&config.data_path).map_err(|e| {
        format!(
            "Failed to create data directory '{}': {} (check directory permissions)",
            config.data_path.display(),
            e
        )
    })?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let state = AppState::new(pool);
    let app = build_app(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
