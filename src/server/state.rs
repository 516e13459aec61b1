use crate::observability::IntakeMetrics;
use crate::services::ContactService;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub csv_import_path: PathBuf,
    pub metrics: IntakeMetrics,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>, csv_import_path: impl Into<PathBuf>) -> Self {
        Self {
            service,
            csv_import_path: csv_import_path.into(),
            metrics: IntakeMetrics::new(),
        }
    }
}
