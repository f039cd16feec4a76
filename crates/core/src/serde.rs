//! Serde helper functions for form-state (de)serialization.
//!
//! Form fields arrive as text that may be empty, half-typed, or garbage while
//! the user is still editing. For derivation purposes an unparseable value is
//! the same as a missing one, so these deserializers never fail on content:
//! they map empty and invalid strings to `None`.

use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for dates: YYYY-MM-DD.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for times of day: HH:mm.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses YYYY-MM-DD, or an RFC 3339 / naive datetime whose date part is used.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| s.parse::<chrono::NaiveDateTime>().ok().map(|dt| dt.date()))
}

/// Parses HH:MM or HH:MM:SS, or the time part of an RFC 3339 / naive datetime.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
        .or_else(|| chrono::DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.time()))
        .or_else(|| s.parse::<chrono::NaiveDateTime>().ok().map(|dt| dt.time()))
}

/// Deserialize an optional NaiveDate, treating empty or invalid strings as None.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_date))
}

/// Deserialize an optional NaiveTime, treating empty or invalid strings as None.
pub fn deserialize_lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.as_deref().and_then(parse_time))
}

/// Deserialize any value, treating null, empty strings and values that do not
/// fit `T` (e.g. an unknown enum variant) as None.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        value => serde_json::from_value(value).ok(),
    })
}

/// Deserialize a checkbox, treating null and anything that is not a boolean
/// (or the strings "true" / "false") as unchecked.
pub fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(checked) => checked,
        serde_json::Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Deserialize a free-text numeric field that may arrive as a JSON string or number.
pub fn deserialize_numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Text(String),
        Number(serde_json::Number),
    }

    let value: Option<Numeric> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Numeric::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Numeric::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Serialize a NaiveDate as YYYY-MM-DD.
pub fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Serialize an optional NaiveDate as YYYY-MM-DD.
pub fn serialize_optional_date<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serialize_date(date, serializer),
        None => serializer.serialize_none(),
    }
}

/// Serialize a NaiveTime as HH:mm.
pub fn serialize_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(TIME_FORMAT))
}
