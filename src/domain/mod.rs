//! Domain value objects and rules.
//!
//! This module holds the pieces every ingestion path shares: the text
//! sanitizer, the per-field pattern rules, the validation error types and
//! the storage identifier. Nothing here touches I/O.

pub mod contact_id;
pub mod errors;
pub mod field;
pub mod sanitize;

pub use contact_id::ContactId;
pub use errors::{FieldErrors, ValidationError};
pub use field::Field;
