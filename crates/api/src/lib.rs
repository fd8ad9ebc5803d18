//! # ShiftManager API
//!
//! The API crate provides the web server implementation for the ShiftManager
//! backend. It defines the endpoints for creating planning periods (with the
//! driver notification fan-out) and for collecting driver availability.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors onto HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; persistence goes through
//! `shiftmanager-db` and email dispatch through `shiftmanager-mail`. Both
//! clients are constructed once at startup and injected through [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use shiftmanager_mail::Notifier;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Dependencies are constructed once in `main` and passed in here rather
/// than living as module-level globals, so handlers and tests receive them
/// explicitly.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Email client used for driver notifications
    pub mailer: Arc<dyn Notifier>,
    /// Base URL embedded in the per-driver availability links
    pub app_base_url: String,
}

/// Starts the API server with the provided configuration and clients
///
/// This function initializes logging, configures routes, and starts the
/// HTTP server.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `db_pool` - PostgreSQL connection pool for database operations
/// * `mailer` - Email client used for the notification fan-out
pub async fn start_server(
    config: config::ApiConfig,
    db_pool: PgPool,
    mailer: Arc<dyn Notifier>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        mailer,
        app_base_url: config.app_base_url.clone(),
    });

    // Build the application router with all routes
    let app = Router::new()
        // Liveness and health endpoints
        .merge(routes::health::routes())
        // Period creation endpoint
        .merge(routes::period::routes())
        // Availability submission endpoint
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Cross-origin requests are permitted from any origin
    let cors = tower_http::cors::CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(tower_http::cors::Any);
    let app = app.layer(cors);

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(axum::error_handling::HandleErrorLayer::new(
                |_: tower::BoxError| async { axum::http::StatusCode::REQUEST_TIMEOUT },
            ))
            .timeout(std::time::Duration::from_secs(config.request_timeout)),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
