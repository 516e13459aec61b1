use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::ContactRecord;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

/// Table holding submitted contacts.
pub const CONTACT_TABLE: &str = "mysql_table";

/// Insert columns, in bind order.
pub const CONTACT_COLUMNS: [&str; 5] = [
    "first_name",
    "second_name",
    "email",
    "phone_number",
    "eircode",
];

// MySQL caps a prepared statement at 65535 placeholders.
const BIND_LIMIT: usize = 65535;
const ROWS_PER_STATEMENT: usize = BIND_LIMIT / CONTACT_COLUMNS.len();

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS mysql_table (
      id INT AUTO_INCREMENT PRIMARY KEY,
      first_name VARCHAR(20) NOT NULL,
      second_name VARCHAR(20) NOT NULL,
      email VARCHAR(100) NOT NULL,
      phone_number VARCHAR(10) NOT NULL,
      eircode VARCHAR(6) NOT NULL,
      created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

const INSERT_ONE_SQL: &str = "
    INSERT INTO mysql_table (first_name, second_name, email, phone_number, eircode)
    VALUES (?, ?, ?, ?, ?)";

/// Contact repository backed by a MySQL connection pool.
///
/// The pool is built by the caller and handed in; cloning the repository
/// shares the same pool.
#[derive(Clone)]
pub struct MySqlContactRepository {
    pool: MySqlPool,
}

impl MySqlContactRepository {
    /// Create a new MySqlContactRepository over the given pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        tracing::info!(table = CONTACT_TABLE, "Schema checked");
        Ok(())
    }

    async fn insert_one(&self, record: &ContactRecord) -> StoreResult<ContactId> {
        let result = sqlx::query(INSERT_ONE_SQL)
            .bind(&record.first_name)
            .bind(&record.second_name)
            .bind(&record.email)
            .bind(&record.phone_number)
            .bind(&record.eircode)
            .execute(&self.pool)
            .await?;

        Ok(ContactId::new(result.last_insert_id()))
    }

    async fn insert_many(&self, records: &[ContactRecord]) -> StoreResult<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut affected = 0;

        for chunk in records.chunks(ROWS_PER_STATEMENT) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO ");
            query_builder.push(CONTACT_TABLE);
            query_builder.push(" (");
            query_builder.push(CONTACT_COLUMNS.join(", "));
            query_builder.push(") ");

            query_builder.push_values(chunk, |mut row, record| {
                row.push_bind(&record.first_name)
                    .push_bind(&record.second_name)
                    .push_bind(&record.email)
                    .push_bind(&record.phone_number)
                    .push_bind(&record.eircode);
            });

            let result = query_builder.build().execute(&mut *tx).await?;
            affected += result.rows_affected();
        }

        // Dropping the transaction on an early return rolls it back.
        tx.commit().await?;

        tracing::debug!(
            rows = affected,
            table = CONTACT_TABLE,
            "Batch insert committed"
        );
        Ok(affected)
    }
}
