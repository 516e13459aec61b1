//! Contact records as they arrive and as they are stored.

use crate::domain::Field;
use serde::{Deserialize, Deserializer, Serialize};

/// A contact exactly as submitted, before sanitization.
///
/// Every field is optional: a missing value is treated as the empty string
/// by the sanitizer and then rejected by the field rules. JSON numbers are
/// accepted and kept as their decimal text so a phone number sent as a
/// number is validated like any other input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawContact {
    #[serde(deserialize_with = "lenient_text")]
    pub first_name: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub second_name: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub phone_number: Option<String>,

    #[serde(deserialize_with = "lenient_text")]
    pub eircode: Option<String>,
}

impl RawContact {
    /// Raw value of a single field.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::SecondName => self.second_name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::PhoneNumber => self.phone_number.as_deref(),
            Field::Eircode => self.eircode.as_deref(),
        }
    }

    /// Set a single field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            Field::FirstName => self.first_name = value,
            Field::SecondName => self.second_name = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::Eircode => self.eircode = value,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    }))
}

/// A sanitized contact that passed every field rule.
///
/// Only [`crate::validation::validate`] builds these from user input, so
/// anything handed to a repository has already been cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone_number: String,
    pub eircode: String,
}

impl ContactRecord {
    /// Cleaned value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::SecondName => &self.second_name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Eircode => &self.eircode,
        }
    }
}
