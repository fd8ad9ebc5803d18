use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use shiftmanager_api::config::ApiConfig;
use shiftmanager_db::{create_pool, schema::initialize_database};
use shiftmanager_mail::resend::ResendMailer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Create email client
    let mailer = Arc::new(ResendMailer::new(
        config.resend_api_key.clone(),
        config.resend_base_url.clone(),
    ));

    // Start API server
    shiftmanager_api::start_server(config, db_pool, mailer).await?;

    Ok(())
}
