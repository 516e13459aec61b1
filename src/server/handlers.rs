//! Route handlers.

use crate::error::{ImportError, SubmitError};
use crate::models::ImportOutcome;
use crate::observability::{MetricsSnapshot, Timer};
use crate::server::extract::ContactPayload;
use crate::server::response::{ApiError, ApiResult, STORAGE_FAILURE_MESSAGE};
use crate::server::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: ImportOutcome,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
    pub metrics: MetricsSnapshot,
}

/// `POST /submit`: validate one contact and store it.
pub async fn submit(
    State(state): State<AppState>,
    ContactPayload(raw): ContactPayload,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    match state.service.submit(raw).await {
        Ok(id) => {
            state.metrics.track_submission_accepted();
            Ok((
                StatusCode::CREATED,
                Json(SubmitResponse {
                    message: format!("saved successfully (id: {})", id),
                }),
            ))
        }
        Err(SubmitError::Invalid(errors)) => {
            state.metrics.track_submission_rejected(errors.len());
            Err(ApiError::validation(errors))
        }
        Err(SubmitError::Persistence(err)) => {
            error!(error = %err, "Failed to store submission");
            state.metrics.track_submission_failed();
            Err(ApiError::internal(STORAGE_FAILURE_MESSAGE))
        }
    }
}

/// `GET /import-csv`: import the configured server-local CSV file.
///
/// The import runs on its own task, so once started it finishes even if the
/// client disconnects.
pub async fn import_csv(State(state): State<AppState>) -> ApiResult<Json<ImportResponse>> {
    let service = state.service.clone();
    let path = state.csv_import_path.clone();
    let timer = Timer::new("import_csv");

    let joined = tokio::spawn(async move { service.import_csv_file(&path).await }).await;

    let result = match joined {
        Ok(result) => result,
        Err(join_err) => {
            timer.finish_with_status(false);
            error!(error = %join_err, "Import task did not complete");
            state.metrics.track_import_failed();
            return Err(ApiError::internal("CSV import failed"));
        }
    };

    match result {
        Ok(outcome) => {
            let duration_ms = timer.finish_with_status(true);
            state
                .metrics
                .track_import_completed(outcome.inserted_rows, outcome.invalid_count);
            info!(
                inserted = outcome.inserted_rows,
                invalid = outcome.invalid_count,
                duration_ms = duration_ms as u64,
                "CSV import completed"
            );
            Ok(Json(ImportResponse {
                message: "CSV import completed".to_string(),
                outcome,
            }))
        }
        Err(ImportError::NotFound(path)) => {
            timer.finish_with_status(false);
            warn!(path = %path.display(), "CSV file not found");
            state.metrics.track_import_failed();
            Err(ApiError::not_found(format!(
                "CSV file not found: {}",
                path.display()
            )))
        }
        Err(ImportError::Persistence(err)) => {
            timer.finish_with_status(false);
            error!(error = %err, "Failed to store imported rows");
            state.metrics.track_import_failed();
            Err(ApiError::internal(STORAGE_FAILURE_MESSAGE))
        }
        Err(err) => {
            timer.finish_with_status(false);
            error!(error = %err, "CSV import aborted");
            state.metrics.track_import_failed();
            Err(ApiError::internal("CSV import failed"))
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    })
}
