//! Bulk import of contacts from CSV.
//!
//! Rows are read as a lazy stream, validated with the same rules as the
//! web form, and the valid ones are written in one batch at the end.

pub mod columns;
mod importer;

pub use columns::ColumnMap;
pub use importer::{import_csv, import_csv_file};
