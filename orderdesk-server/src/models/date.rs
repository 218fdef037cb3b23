//! Calendar dates in `MM/DD/YYYY` form
//!
//! Orders accept and return their dates as text like `12/20/2023`.
//! In the store they are plain `NaiveDate` values.

use chrono::NaiveDate;

/// Textual date format used on the wire and in seed data.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse `12/20/2023` into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// serde adapter for `#[serde(with = "mdy")]` fields.
pub mod mdy {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(|e| {
            D::Error::custom(format!("invalid date '{}', expected MM/DD/YYYY: {}", raw, e))
        })
    }
}
