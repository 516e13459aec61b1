//! Record validation shared by the web submit path and the CSV importer.
//!
//! Both ingestion paths call [`validate`]; there is no second copy of the
//! field rules anywhere in the crate.

use crate::domain::sanitize::{clean, normalize_eircode};
use crate::domain::{Field, FieldErrors, ValidationError};
use crate::models::{ContactRecord, RawContact};

/// Result of validating one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValidation {
    /// Sanitized values, whether or not they passed.
    pub cleaned: ContactRecord,

    /// Failing fields with their messages. Empty when the record is valid.
    pub errors: FieldErrors,
}

impl RecordValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in form order, as reported for CSV rows.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().cloned().collect()
    }

    /// The cleaned record if every field passed, otherwise the field errors.
    pub fn into_result(self) -> Result<ContactRecord, FieldErrors> {
        if self.errors.is_empty() {
            Ok(self.cleaned)
        } else {
            Err(self.errors)
        }
    }
}

/// Sanitize every field of `raw` and check it against its rule.
pub fn validate(raw: &RawContact) -> RecordValidation {
    let cleaned = ContactRecord {
        first_name: clean(raw.first_name.as_deref()),
        second_name: clean(raw.second_name.as_deref()),
        email: clean(raw.email.as_deref()),
        phone_number: clean(raw.phone_number.as_deref()),
        eircode: normalize_eircode(raw.eircode.as_deref()),
    };

    let errors = Field::ALL
        .into_iter()
        .filter(|field| !field.is_valid(cleaned.get(*field)))
        .map(|field| (field, ValidationError::new(field).to_string()))
        .collect();

    RecordValidation { cleaned, errors }
}
