//! Calendar date type used throughout the persisted format
//!
//! Dates are stored as `DD/MM/YYYY` strings, which is part of the data-file
//! contract. All arithmetic is exact calendar-day arithmetic.

use chrono::{Duration, Local, NaiveDate};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The persisted date format
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A calendar date (no time component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns today's date according to the local clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Creates a date from year, month and day, if they form a real date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `DD/MM/YYYY` string
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }

    /// Returns this date shifted forward by the given number of calendar days
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns the number of whole days from `earlier` to this date
    ///
    /// Negative when this date comes before `earlier`.
    pub fn days_since(&self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s).map_err(|e| D::Error::custom(format!("invalid date '{}': {}", s, e)))
    }
}
