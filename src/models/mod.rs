//! Data models for submitted contacts and import results.

pub mod contact;
pub mod import;

pub use contact::{ContactRecord, RawContact};
pub use import::{ImportOutcome, InvalidRow};
