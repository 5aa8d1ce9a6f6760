//! Serde support for record dates.
//!
//! Dates are written as RFC 3339 timestamps. When reading, a bare calendar
//! date such as `2024-01-01` is also accepted and means midnight UTC.

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

/// Parse a timestamp in RFC 3339 format or a calendar date in the format `YYYY-MM-DD`.
///
/// # Errors
/// Returns an error if `text` is in neither format.
pub fn parse_record_date(text: &str) -> Result<OffsetDateTime, time::error::Parse> {
    match OffsetDateTime::parse(text, &Rfc3339) {
        Ok(date_time) => Ok(date_time),
        Err(_) => {
            let date = Date::parse(text, format_description!("[year]-[month]-[day]"))?;
            Ok(date.midnight().assume_utc())
        }
    }
}

pub fn serialize<S>(date: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = date.format(&Rfc3339).map_err(ser::Error::custom)?;

    serializer.serialize_str(&text)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    parse_record_date(&text).map_err(|error| {
        de::Error::custom(format!("invalid date {text:?}: {error}"))
    })
}

pub mod option {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use time::OffsetDateTime;

    use super::parse_record_date;

    pub fn serialize<S>(date: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_record_date(&text).map(Some).map_err(|error| {
                de::Error::custom(format!("invalid date {text:?}: {error}"))
            }),
            None => Ok(None),
        }
    }
}
