//! Streaming CSV importer.

use crate::error::{ImportError, ImportResult};
use crate::import::columns::ColumnMap;
use crate::models::{ContactRecord, ImportOutcome};
use crate::repositories::ContactRepository;
use crate::validation::validate;
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncRead;

/// Import contacts from the CSV file at `path`.
///
/// A missing file fails with [`ImportError::NotFound`] before anything is
/// read. Otherwise this behaves like [`import_csv`].
pub async fn import_csv_file(
    path: &Path,
    repository: &dyn ContactRepository,
) -> ImportResult<ImportOutcome> {
    let file = File::open(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImportError::NotFound(path.to_path_buf()),
        _ => ImportError::Io(e),
    })?;

    tracing::info!(path = %path.display(), "Starting CSV import");
    import_csv(file, repository).await
}

/// Import contacts from a CSV byte stream.
///
/// The first row names the columns. Each data row is validated on its own:
/// invalid rows are reported with their spreadsheet row number (header = 1)
/// and never stop the run. Valid rows are collected and written with a
/// single [`ContactRepository::insert_many`] call once the stream ends.
///
/// Rows may be shorter or longer than the header: absent cells count as
/// empty and extra cells are ignored. A parse error anywhere in the stream
/// (such as invalid UTF-8) aborts the import and nothing is written.
pub async fn import_csv<R>(
    source: R,
    repository: &dyn ContactRepository,
) -> ImportResult<ImportOutcome>
where
    R: AsyncRead + Unpin + Send,
{
    let mut reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .create_reader(source);

    let headers = reader.headers().await?.clone();
    if headers.is_empty() {
        return Err(ImportError::MissingHeader);
    }

    let columns = ColumnMap::from_headers(&headers);
    let missing = columns.missing_fields();
    if !missing.is_empty() {
        tracing::warn!(?missing, "CSV header lacks columns; those cells count as empty");
    }

    let mut outcome = ImportOutcome::default();
    let mut batch: Vec<ContactRecord> = Vec::new();
    let mut row = 1;

    let mut records = reader.into_records();
    while let Some(record) = records.next().await {
        let record = record?;
        row += 1;

        let validation = validate(&columns.raw_contact(&record));
        if validation.is_valid() {
            batch.push(validation.cleaned);
        } else {
            tracing::debug!(row, errors = validation.errors.len(), "Rejected CSV row");
            outcome.push_invalid(row, validation.messages());
        }
    }

    outcome.inserted_rows = repository.insert_many(&batch).await?;

    tracing::debug!(
        inserted_rows = outcome.inserted_rows,
        invalid_count = outcome.invalid_count,
        "CSV rows written"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::error::StoreResult;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    struct CountingRepository;

    #[async_trait]
    impl ContactRepository for CountingRepository {
        async fn ensure_schema(&self) -> StoreResult<()> {
            Ok(())
        }

        async fn insert_one(&self, _record: &ContactRecord) -> StoreResult<ContactId> {
            Ok(ContactId::new(1))
        }

        async fn insert_many(&self, records: &[ContactRecord]) -> StoreResult<u64> {
            Ok(records.len() as u64)
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_import_leaves_completion_info_to_caller() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let data = "first_name,second_name,email,phone_number,eircode\n\
                    Aoife,Murphy,aoife@example.ie,0871234567,D02X28\n";
        let outcome = import_csv(data.as_bytes(), &CountingRepository)
            .await
            .unwrap();
        assert_eq!(outcome.inserted_rows, 1);

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(!text.contains("CSV import completed"), "{text}");
    }
}
