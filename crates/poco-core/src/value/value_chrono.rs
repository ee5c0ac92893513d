use super::Value;
use crate::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Text layouts engines commonly use for date-times, tried in order after
/// RFC 3339.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

fn parse_naive_date_time(src: &str) -> Option<NaiveDateTime> {
    let src = src.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(src) {
        return Some(date_time.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(src, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(src, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn parse_timestamp(src: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(src.trim()) {
        Ok(date_time) => Some(date_time.with_timezone(&Utc)),
        // Values without an offset are taken to be UTC.
        Err(_) => parse_naive_date_time(src).map(|date_time| date_time.and_utc()),
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveTime> for Value {
    fn from(src: NaiveTime) -> Self {
        Self::Time(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Timestamp(src)
    }
}

impl TryFrom<Value> for NaiveDate {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Date(v) => Some(*v),
            Value::DateTime(v) => Some(v.date()),
            Value::Timestamp(v) => Some(v.date_naive()),
            Value::String(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .ok()
                .or_else(|| parse_naive_date_time(v).map(|v| v.date())),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "chrono::NaiveDate"))
    }
}

impl TryFrom<Value> for NaiveTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Time(v) => Some(*v),
            Value::DateTime(v) => Some(v.time()),
            Value::Timestamp(v) => Some(v.time()),
            Value::String(v) => TIME_FORMATS
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(v.trim(), format).ok()),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "chrono::NaiveTime"))
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::DateTime(v) => Some(*v),
            Value::Timestamp(v) => Some(v.naive_utc()),
            Value::Date(v) => v.and_hms_opt(0, 0, 0),
            Value::String(v) => parse_naive_date_time(v),
            Value::I64(v) => DateTime::from_timestamp(*v, 0).map(|v| v.naive_utc()),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "chrono::NaiveDateTime"))
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Timestamp(v) => Some(*v),
            Value::DateTime(v) => Some(v.and_utc()),
            Value::Date(v) => v.and_hms_opt(0, 0, 0).map(|v| v.and_utc()),
            Value::String(v) => parse_timestamp(v),
            Value::I64(v) => DateTime::from_timestamp(*v, 0),
            _ => None,
        };

        converted.ok_or_else(|| Error::type_conversion(value, "chrono::DateTime<Utc>"))
    }
}
