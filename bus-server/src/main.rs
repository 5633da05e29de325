use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bus_server::config::ServerConfig;
use bus_server::matcher::{AliasTable, RouteMatcher};
use bus_server::registrations::RegistrationStore;
use bus_server::source::{CachedRouteSource, JsonFileSource, RouteSource};
use bus_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(%config, "configuration loaded");

    // Route data is read per search; check it once so a bad path shows up
    // at startup rather than on the first request
    let file_source = JsonFileSource::new(&config.data_path);
    match file_source.load() {
        Ok(routes) => info!("Loaded {} routes from {}", routes.len(), config.data_path.display()),
        Err(e) => warn!("Route data not available yet: {e}"),
    }

    let routes: Arc<dyn RouteSource> = match config.cache_ttl {
        Some(ttl) => Arc::new(CachedRouteSource::new(file_source, ttl)),
        None => Arc::new(file_source),
    };

    let matcher = RouteMatcher::new(Arc::new(AliasTable::default()));
    let state = AppState::new(routes, matcher, RegistrationStore::new());
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {e}", config.bind_addr);
            std::process::exit(1);
        }
    };

    info!("Local Bus Agent listening on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET  /health                      - Health check");
    info!("  GET  /api/buses?q=<route>         - Search bus timings");
    info!("  GET  /admin/registrations         - User registrations");
    info!("  GET  /admin/course-registrations  - Course registrations");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
    }

    info!("Server shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
