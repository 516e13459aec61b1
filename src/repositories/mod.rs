//! Storage access for contact records.

mod mysql_contact_repository;
mod traits;

pub use mysql_contact_repository::{MySqlContactRepository, CONTACT_COLUMNS, CONTACT_TABLE};
pub use traits::ContactRepository;
