//! Contact service layer.
//!
//! Business logic for the two ingestion paths: single submissions and bulk
//! CSV imports. Both validate through [`crate::validation`] and persist
//! through the injected [`ContactRepository`].

use crate::domain::ContactId;
use crate::error::{ImportResult, SubmitError, SubmitResult};
use crate::import;
use crate::models::{ImportOutcome, RawContact};
use crate::repositories::ContactRepository;
use crate::validation::validate;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate a single submission and store it.
    ///
    /// Returns the storage identifier, or every failing field when the
    /// record is rejected. A rejected record is never written.
    async fn submit(&self, raw: RawContact) -> SubmitResult<ContactId>;

    /// Import every row of the CSV file at `path`.
    async fn import_csv_file(&self, path: &Path) -> ImportResult<ImportOutcome>;
}

/// Default implementation of ContactService.
#[derive(Clone)]
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, raw: RawContact) -> SubmitResult<ContactId> {
        let record = validate(&raw).into_result().map_err(SubmitError::Invalid)?;

        let id = self.repository.insert_one(&record).await?;
        tracing::info!(id = %id, "Contact saved");
        Ok(id)
    }

    async fn import_csv_file(&self, path: &Path) -> ImportResult<ImportOutcome> {
        import::import_csv_file(path, self.repository.as_ref()).await
    }
}
