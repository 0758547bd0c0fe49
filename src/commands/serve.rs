//! Serve command - Starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database, LinearSeverityModel, Persistence};
use crate::services::Services;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let model = Arc::new(LinearSeverityModel::load(&config.severity_model_path)?);

    let (persistence, database) = if args.in_memory {
        tracing::warn!("Using in-memory stores; records are lost on shutdown");
        (Persistence::in_memory(), None)
    } else {
        let db = Database::connect(&config)
            .await
            .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
        (Persistence::new(db.get_connection()), Some(Arc::new(db)))
    };

    let cache = match config.redis_url.as_deref() {
        Some(url) => Some(Arc::new(Cache::connect(url).await?)),
        None => {
            tracing::warn!("REDIS_URL not set; rate limits are counted per process");
            None
        }
    };

    let services = Services::new(&persistence, model);
    let app_state = AppState::from_container(&services)
        .with_database(database)
        .with_cache(cache);

    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    // Peer addresses feed the rate limiter when no proxy header is present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
