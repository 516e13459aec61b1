//! HTTP server for the contact form.
//!
//! Routes:
//! - `POST /submit`: one contact as JSON or a url-encoded form
//! - `GET /import-csv`: bulk import of the configured CSV file
//! - `GET /health`: liveness plus intake counters
//!
//! Anything else falls through to the static asset directory when one is
//! configured.

pub mod extract;
pub mod handlers;
pub mod response;
pub mod state;

pub use extract::ContactPayload;
pub use response::{ApiError, ApiResult};
pub use state::AppState;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Build the application router.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/submit", post(handlers::submit))
        .route("/import-csv", get(handlers::import_csv))
        .route("/health", get(handlers::health));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(SetResponseHeaderLayer::if_not_present(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    ))
    .layer(SetResponseHeaderLayer::if_not_present(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    ))
    .layer(SetResponseHeaderLayer::if_not_present(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn run_server(listener: TcpListener, app: Router) -> Result<()> {
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
