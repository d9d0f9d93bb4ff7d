//! Canonical calendar-day key for todo buckets.
//!
//! # Responsibility
//! - Derive one `YYYY-MM-DD` key per calendar day.
//! - Be the only place where dates are turned into bucket keys.
//!
//! # Invariants
//! - Keys are built from calendar fields (year, month, day) only; no timezone
//!   conversion happens after a date has been chosen.
//! - Distinct calendar days always produce distinct keys.
//! - A deserialized key must parse back into a real calendar day.

use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key for one calendar day.
///
/// Ordering follows the calendar, so a `BTreeMap<DateKey, _>` iterates
/// buckets oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

/// Error returned when a string is not a canonical date key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKeyParseError {
    input: String,
}

impl Display for DateKeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date key `{}`; expected YYYY-MM-DD", self.input)
    }
}

impl Error for DateKeyParseError {}

/// Derives the bucket key for a calendar date.
pub fn date_key(date: NaiveDate) -> DateKey {
    DateKey(date)
}

impl DateKey {
    /// Parses a canonical key.
    ///
    /// Accepts exactly what `to_string()` produces: zero-padded fields
    /// (`2024-03-01`, not `2024-3-1`) and a leading sign for years outside
    /// `0..=9999` (`+10000-01-01`, `-0001-12-31`).
    pub fn parse(value: &str) -> Result<Self, DateKeyParseError> {
        let error = || DateKeyParseError {
            input: value.to_string(),
        };
        let mut fields = value.rsplitn(3, '-');
        let (Some(day), Some(month), Some(year)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(error());
        };
        let year = year.parse::<i32>().map_err(|_| error())?;
        let month = month.parse::<u32>().map_err(|_| error())?;
        let day = day.parse::<u32>().map_err(|_| error())?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(error)?;
        let key = Self(date);
        if key.to_string() != value {
            return Err(error());
        }
        Ok(key)
    }

    /// Calendar day this key identifies.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(value: NaiveDate) -> Self {
        date_key(value)
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateKeyVisitor;

        impl Visitor<'_> for DateKeyVisitor {
            type Value = DateKey;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a YYYY-MM-DD date key")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                DateKey::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DateKeyVisitor)
    }
}
