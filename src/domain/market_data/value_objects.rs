use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::errors::AppError;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Value Object - calendar day in `YYYY-MM-DD` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessDay(NaiveDate);

impl BusinessDay {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, AppError> {
        if !(0..=9999).contains(&year) {
            return Err(AppError::Validation(format!("year out of range: {}", year)));
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or_else(|| AppError::Validation(format!("no such day: {:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Midnight UTC of this day, in seconds since the Unix epoch
    pub fn midnight_unix_seconds(&self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// UTC calendar day containing `seconds`, if chrono can represent it
    pub fn containing_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(|instant| Self(instant.date_naive()))
    }

    /// Axis label such as `22 Dec`
    pub fn short_label(&self) -> String {
        self.0.format("%-d %b").to_string()
    }
}

impl std::fmt::Display for BusinessDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

/// Exactly `DDDD-DD-DD`; chrono alone would also take signs and short fields
fn has_day_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for BusinessDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::Validation(format!("expected YYYY-MM-DD, got {:?}", s));
        if !has_day_shape(s) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, DAY_FORMAT).map(Self).map_err(|_| invalid())
    }
}

impl TryFrom<String> for BusinessDay {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BusinessDay> for String {
    fn from(day: BusinessDay) -> Self {
        day.to_string()
    }
}

/// Value Object - horizontal coordinate of a series point.
///
/// Compared by the instant it denotes, so a day equals its midnight timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartTime {
    Day(BusinessDay),
    Unix(i64),
}

impl ChartTime {
    /// Seconds since the Unix epoch; a day maps to its midnight UTC
    pub fn unix_seconds(&self) -> i64 {
        match self {
            ChartTime::Day(day) => day.midnight_unix_seconds(),
            ChartTime::Unix(seconds) => *seconds,
        }
    }

    /// Axis label such as `22 Dec`
    pub fn short_label(&self) -> String {
        match self {
            ChartTime::Day(day) => day.short_label(),
            ChartTime::Unix(seconds) => BusinessDay::containing_unix_seconds(*seconds)
                .map_or_else(|| seconds.to_string(), |day| day.short_label()),
        }
    }
}

impl PartialEq for ChartTime {
    fn eq(&self, other: &Self) -> bool {
        self.unix_seconds() == other.unix_seconds()
    }
}

impl Eq for ChartTime {}

impl PartialOrd for ChartTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChartTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unix_seconds().cmp(&other.unix_seconds())
    }
}

impl std::fmt::Display for ChartTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartTime::Day(day) => write!(f, "{}", day),
            ChartTime::Unix(seconds) => write!(f, "{}", seconds),
        }
    }
}

impl From<BusinessDay> for ChartTime {
    fn from(day: BusinessDay) -> Self {
        ChartTime::Day(day)
    }
}

impl From<i64> for ChartTime {
    fn from(seconds: i64) -> Self {
        ChartTime::Unix(seconds)
    }
}

/// Value Object - ticker symbol used as a URL path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Result<Self, AppError> {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("symbol must not be empty".to_string()));
        }
        if trimmed.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#')) {
            return Err(AppError::Validation(format!("symbol contains reserved characters: {:?}", symbol)));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
