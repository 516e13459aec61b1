//! Contact Intake - backend for a contact web form.
//!
//! Contacts arrive one at a time from the form (`POST /submit`) or in bulk
//! from a CSV file (`GET /import-csv`). Both paths sanitize and validate each
//! record with the same rules before it is written to MySQL.
//!
//! # Architecture
//!
//! - **domain**: Field rules, sanitizer, identifiers and validation errors
//! - **models**: Raw and cleaned contact records, import outcomes
//! - **validation**: The record validator shared by both ingestion paths
//! - **import**: Streaming CSV importer
//! - **repositories**: Persistence gateway and its MySQL implementation
//! - **services**: Submit and import orchestration
//! - **server**: axum router and handlers
//! - **observability**: Intake counters and timers
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ContactId, Field, FieldErrors, ValidationError};
pub use error::{ConfigError, ImportError, StoreError, SubmitError};
pub use models::{ContactRecord, ImportOutcome, InvalidRow, RawContact};
pub use observability::{IntakeMetrics, MetricsSnapshot};
pub use repositories::{ContactRepository, MySqlContactRepository};
pub use server::{router, AppState};
pub use services::{ContactService, ContactServiceImpl};
pub use validation::{validate, RecordValidation};
