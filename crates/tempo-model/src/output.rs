//! Canonical results produced by the normalizer.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
///
/// No timezone is attached: the value shares whatever reference offset the
/// configured [`TimezoneRule`](crate::TimezoneRule) used to produce it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalMillis(pub i64);

impl CanonicalMillis {
    /// 1970-01-01T00:00:00.
    pub const EPOCH: Self = Self(0);

    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Interprets the count as a UTC wall clock.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_naive_utc(self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.0).map(|dt| dt.naive_utc())
    }
}

impl From<CanonicalMillis> for i64 {
    fn from(value: CanonicalMillis) -> Self {
        value.0
    }
}

impl From<i64> for CanonicalMillis {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CanonicalMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Calendar components of a temporal value, without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i32,
    /// 1 through 12.
    pub month: u32,
    /// 1 through 31.
    pub day: u32,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns `None` when the fields do not name a real date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Three-way classification of untyped text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalKind {
    /// Parses as a calendar date with a zero time of day.
    Date,
    /// Parses with a non-zero time of day.
    Time,
    /// Not temporal; keep as a string.
    Opaque,
}

impl TemporalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Opaque => "opaque",
        }
    }

    pub fn is_temporal(self) -> bool {
        !matches!(self, Self::Opaque)
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
