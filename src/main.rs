// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::panel_renderer::StandardRenderer;
use crate::application::signal_generator::SignalGenerator;
use crate::application::streaming_service::StreamingService;
use crate::domain::dashboard::DASHBOARD_TITLE;
use crate::infrastructure::config::load_config;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_config()?;

    if config.vitals.noise_seed.is_some() {
        tracing::info!("Vitals noise is seeded; every render repeats the same samples");
    }

    // Create services (application layer)
    let renderer = StandardRenderer::new(SignalGenerator::new(config.vitals.noise_seed));
    let dashboard_service = DashboardService::new(Arc::new(renderer));
    let streaming_service = StreamingService::new(config.pacing.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind_addr))?;
    tracing::info!("Starting {} on {}", DASHBOARD_TITLE, addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
