use async_trait::async_trait;
use contact_intake::domain::ContactId;
use contact_intake::error::{StoreError, StoreResult};
use contact_intake::models::ContactRecord;
use contact_intake::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps inserted records in memory, hands out increasing ids, and tracks
/// method calls for verification. `fail_writes(true)` makes every insert
/// return a storage error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    batches: Arc<Mutex<Vec<usize>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            batches: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A repository whose inserts always fail.
    pub fn failing() -> Self {
        let repo = Self::new();
        repo.fail_writes(true);
        repo
    }

    pub fn fail_writes(&self, fail: bool) {
        self.failing.store(fail, Ordering::SeqCst);
    }

    /// Everything stored so far, in insertion order.
    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Size of each batch passed to `insert_many`, including empty ones.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.track_call("ensure_schema");
        self.check_available()
    }

    async fn insert_one(&self, record: &ContactRecord) -> StoreResult<ContactId> {
        self.track_call("insert_one");
        self.check_available()?;

        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        Ok(ContactId::new(records.len() as u64))
    }

    async fn insert_many(&self, records: &[ContactRecord]) -> StoreResult<u64> {
        self.track_call("insert_many");
        self.batches.lock().unwrap().push(records.len());
        if records.is_empty() {
            return Ok(0);
        }
        self.check_available()?;

        self.records.lock().unwrap().extend_from_slice(records);
        Ok(records.len() as u64)
    }
}
