//! Serde helpers for the date and time encodings used in ticket documents.
//!
//! Dates are written as `dd.mm.yy` and times as `h:mm` or `hh:mm`.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime};
use regex::Regex;

pub const DATE_FORMAT: &str = "%d.%m.%y";
pub const TIME_FORMAT: &str = "%H:%M";

// chrono accepts one or two digits in every numeric field, so field widths
// are checked up front.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{2}$").expect("Invalid regex pattern"));
static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("Invalid regex pattern"));

/// Parse a `dd.mm.yy` date. Two-digit years always land in 2000-2099.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if !DATE_SHAPE.is_match(value) {
        return Err(format!("invalid date '{value}': expected dd.mm.yy"));
    }

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("invalid date '{value}': {e}"))?;

    if date.year() >= 2000 {
        return Ok(date);
    }

    date.with_year(date.year() + 100)
        .ok_or_else(|| format!("invalid date '{value}': year out of range"))
}

/// Parse an `h:mm` or `hh:mm` wall-clock time.
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    if !TIME_SHAPE.is_match(value) {
        return Err(format!("invalid time '{value}': expected h:mm or hh:mm"));
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| format!("invalid time '{value}': {e}"))
}

pub mod date {
    use chrono::NaiveDate;
    use serde::{de::Error as _, Deserialize as _, Deserializer, Serialize as _, Serializer};

    use super::{parse_date, DATE_FORMAT};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        date.format(DATE_FORMAT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}

pub mod time {
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize as _, Deserializer, Serialize as _, Serializer};

    use super::{parse_time, TIME_FORMAT};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time.format(TIME_FORMAT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(D::Error::custom)
    }
}
