//! Mapping from CSV header names to contact fields.

use crate::domain::Field;
use crate::models::RawContact;
use csv_async::StringRecord;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Header spellings accepted for each field.
fn aliases(field: Field) -> &'static [&'static str] {
    match field {
        Field::FirstName => &["first_name", "firstName", "firstname"],
        Field::SecondName => &["second_name", "secondName", "secondname"],
        Field::Email => &["email"],
        Field::PhoneNumber => &["phone_number", "phone", "phonenumber"],
        Field::Eircode => &["eircode"],
    }
}

/// Resolve a single header cell to a field, if it names one.
pub fn field_for_header(header: &str) -> Option<Field> {
    let header = header.trim_start_matches(BYTE_ORDER_MARK).trim();
    Field::ALL
        .into_iter()
        .find(|field| aliases(*field).contains(&header))
}

/// Column positions of the recognized fields in one CSV source.
///
/// Built once from the header row. Unrecognized columns are ignored; when a
/// field appears under several spellings the first column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    positions: Vec<(Field, usize)>,
}

impl ColumnMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut positions: Vec<(Field, usize)> = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = field_for_header(header) {
                if !positions.iter().any(|(known, _)| *known == field) {
                    positions.push((field, index));
                }
            }
        }

        Self { positions }
    }

    /// Fields the header row did not provide.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.positions.iter().any(|(known, _)| known == field))
            .collect()
    }

    /// Build a raw contact from one data row. Missing cells become empty strings.
    pub fn raw_contact(&self, record: &StringRecord) -> RawContact {
        let mut raw = RawContact::default();
        for field in Field::ALL {
            let value = self
                .positions
                .iter()
                .find(|(known, _)| *known == field)
                .and_then(|(_, index)| record.get(*index))
                .unwrap_or("");
            raw.set(field, value);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_for_header_aliases() {
        assert_eq!(field_for_header("firstName"), Some(Field::FirstName));
        assert_eq!(field_for_header("secondname"), Some(Field::SecondName));
        assert_eq!(field_for_header("phone"), Some(Field::PhoneNumber));
        assert_eq!(field_for_header(" eircode "), Some(Field::Eircode));
        assert_eq!(field_for_header("\u{feff}first_name"), Some(Field::FirstName));
        assert_eq!(field_for_header("postcode"), None);
        assert_eq!(field_for_header("EMAIL"), None);
    }

    #[test]
    fn test_column_map_ignores_unknown_columns() {
        let headers = StringRecord::from(vec!["id", "email", "firstName", "notes"]);
        let map = ColumnMap::from_headers(&headers);

        let row = StringRecord::from(vec!["7", "a@b.ie", "Ann", "hello"]);
        let raw = map.raw_contact(&row);

        assert_eq!(raw.first_name.as_deref(), Some("Ann"));
        assert_eq!(raw.email.as_deref(), Some("a@b.ie"));
        assert_eq!(raw.second_name.as_deref(), Some(""));
        assert_eq!(
            map.missing_fields(),
            vec![Field::SecondName, Field::PhoneNumber, Field::Eircode]
        );
    }

    #[test]
    fn test_column_map_first_spelling_wins() {
        let headers = StringRecord::from(vec!["phone", "phone_number"]);
        let map = ColumnMap::from_headers(&headers);
        let raw = map.raw_contact(&StringRecord::from(vec!["111", "222"]));
        assert_eq!(raw.phone_number.as_deref(), Some("111"));
    }
}
