//! Contact Intake - Main entry point
//!
//! Serves the contact form API over HTTP and stores contacts in MySQL.

use anyhow::Result;
use contact_intake::repositories::{ContactRepository, MySqlContactRepository};
use contact_intake::services::{ContactService, ContactServiceImpl};
use contact_intake::{server, AppState, Config};
use sqlx::mysql::MySqlPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    info!(
        max_connections = config.db_max_connections,
        "Database pool ready"
    );

    let repository = Arc::new(MySqlContactRepository::new(pool)) as Arc<dyn ContactRepository>;
    repository.ensure_schema().await?;

    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let state = AppState::new(service, config.csv_import_path.clone());

    let static_dir = if config.static_dir.is_dir() {
        Some(config.static_dir.as_path())
    } else {
        warn!(
            dir = %config.static_dir.display(),
            "Static directory not found; serving API routes only"
        );
        None
    };

    let app = server::router(state, static_dir);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    server::run_server(listener, app).await?;

    info!("Contact Intake shutdown complete");
    Ok(())
}
