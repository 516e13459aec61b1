//! Results of a bulk CSV import.

use serde::Serialize;

/// A CSV row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRow {
    /// Spreadsheet-style position: the header is row 1, the first data row is 2.
    pub row: usize,

    /// Human-readable messages, one per failing field, in form order.
    pub errors: Vec<String>,
}

/// Summary of one import run. Built per request and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub inserted_rows: u64,
    pub invalid_count: usize,
    pub invalid_rows: Vec<InvalidRow>,
}

impl ImportOutcome {
    /// Record a rejected row.
    pub fn push_invalid(&mut self, row: usize, errors: Vec<String>) {
        self.invalid_rows.push(InvalidRow { row, errors });
        self.invalid_count = self.invalid_rows.len();
    }
}
