//! Lenient field decoding for request bodies.
//!
//! Numeric fields accept either a JSON number or a numeric string, dates
//! accept only `YYYY-MM-DD`. Failures surface as serde errors, which the
//! `ApiJson` extractor turns into a 400.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

fn numeric_to_i64<E: Error>(value: Numeric) -> Result<i64, E> {
    match value {
        Numeric::Int(n) => Ok(n),
        Numeric::Float(f) => Err(E::custom(format!("expected an integer, got {}", f))),
        Numeric::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom(format!("expected an integer, got \"{}\"", s))),
    }
}

fn numeric_to_f64<E: Error>(value: Numeric) -> Result<f64, E> {
    match value {
        Numeric::Int(n) => Ok(n as f64),
        Numeric::Float(f) => Ok(f),
        Numeric::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| E::custom(format!("expected a number, got \"{}\"", s))),
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| format!("invalid date \"{}\", expected YYYY-MM-DD", value))
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    numeric_to_i64(Numeric::deserialize(deserializer)?)
}

pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    numeric_to_f64(Numeric::deserialize(deserializer)?)
}

pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(D::Error::custom)
}

pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Option::<Numeric>::deserialize(deserializer)?
        .map(numeric_to_i64)
        .transpose()
}

pub fn opt_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Option::<Numeric>::deserialize(deserializer)?
        .map(numeric_to_f64)
        .transpose()
}

pub fn opt_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw).map_err(D::Error::custom))
        .transpose()
}

// Patch fields for nullable columns: absent stays `None` (via `#[serde(default)]`),
// an explicit `null` becomes `Some(None)`.

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn nullable_int<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<i64>>, D::Error> {
    opt_int(deserializer).map(Some)
}

pub fn nullable_float<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<f64>>, D::Error> {
    opt_float(deserializer).map(Some)
}
