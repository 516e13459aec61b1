//! ContactId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by storage to a persisted contact.
///
/// Identifiers come from the table's auto-increment column: they increase
/// monotonically and are never reused.
///
/// # Example
///
/// ```
/// use contact_intake::domain::ContactId;
///
/// let id = ContactId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
