//! Dramatis API server entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dramatis_api::error::AppError;
use dramatis_api::routes;
use dramatis_api::state::AppState;
use dramatis_content::ContentCatalog;
use dramatis_core::clock::SystemClock;
use dramatis_engine::PlayerConfig;
use dramatis_session_store::FileSessionRepository;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Dramatis API server");

    // Read configuration from environment.
    let content_dir = std::env::var("CONTENT_DIR")
        .map_err(|_| AppError::Config("CONTENT_DIR environment variable must be set".into()))?;
    let sessions_file =
        std::env::var("SESSIONS_FILE").unwrap_or_else(|_| "sessions.json".to_string());
    let languages: Vec<String> = std::env::var("LANGUAGES")
        .unwrap_or_else(|_| "English".to_string())
        .split(',')
        .map(|l| l.trim().to_owned())
        .filter(|l| !l.is_empty())
        .collect();
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    // Load the content catalog once; it is immutable thereafter.
    let catalog = ContentCatalog::load(&PathBuf::from(&content_dir))?;

    // Build application state.
    let config = PlayerConfig {
        languages,
        ..PlayerConfig::default()
    };
    let app_state = AppState::new(
        Arc::new(catalog),
        Arc::new(config),
        Arc::new(SystemClock),
        Arc::new(FileSessionRepository::new(sessions_file)),
    );

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/viewer", routes::viewer::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
