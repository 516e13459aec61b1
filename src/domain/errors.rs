//! Domain validation errors.

use super::field::Field;
use std::collections::BTreeMap;
use std::fmt;

/// A single field that failed its pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
}

impl ValidationError {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid ({})", self.field.key(), self.field.requirement())
    }
}

impl std::error::Error for ValidationError {}

/// Field -> message mapping for a rejected record, in form order.
pub type FieldErrors = BTreeMap<Field, String>;
