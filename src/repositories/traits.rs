use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::ContactRecord;
use async_trait::async_trait;

/// Persistence gateway for validated contacts.
///
/// Implementations own their connection handling; callers receive one by
/// injection so tests can substitute an in-memory double.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Create the contacts table if it does not exist yet.
    ///
    /// Run once at startup, before the first insert.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Insert a single record and return the identifier storage assigned.
    async fn insert_one(&self, record: &ContactRecord) -> StoreResult<ContactId>;

    /// Insert a batch of records and return the number of rows written.
    ///
    /// An empty batch returns 0 without contacting storage. A non-empty
    /// batch is written completely or not at all.
    async fn insert_many(&self, records: &[ContactRecord]) -> StoreResult<u64>;
}
