//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the
//! ShiftManager API server. It retrieves configuration values from
//! environment variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `RESEND_API_KEY`: Email provider credential (required)
//! - `RESEND_BASE_URL`: Email provider endpoint override (optional)
//! - `APP_BASE_URL`: Base URL for the per-driver links (default: "https://ton-app.com")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the ShiftManager API server
///
/// This struct encapsulates all configuration options for the API server,
/// including networking, the data-store connection, and the email provider
/// credential.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// API key for the transactional email provider
    pub resend_api_key: String,

    /// Override for the email provider endpoint (tests and tooling)
    pub resend_base_url: Option<String>,

    /// Base URL embedded in the per-driver availability links
    pub app_base_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// Loads configuration values from environment variables, providing
    /// sensible defaults where possible. `DATABASE_URL` and
    /// `RESEND_API_KEY` are required and will cause an error if not set.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The RESEND_API_KEY environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Email provider settings
        let resend_api_key = env::var("RESEND_API_KEY")
            .wrap_err("RESEND_API_KEY environment variable must be set")?;
        let resend_base_url = env::var("RESEND_BASE_URL").ok();

        // Link settings
        let app_base_url =
            env::var("APP_BASE_URL").unwrap_or_else(|_| "https://ton-app.com".to_string());

        // Logging settings
        let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            database_url,
            resend_api_key,
            resend_base_url,
            app_base_url,
            log_level,
            request_timeout,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "0.0.0.0:3000")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
