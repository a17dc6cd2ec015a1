//! Tagged temporal input accepted by the normalizer.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TemporalError;

/// Not-a-time marker used by array libraries for 64-bit datetime storage.
///
/// A [`TemporalInput::TypedEpoch`] carrying this value is treated exactly
/// like [`TemporalInput::Missing`].
pub const NAT_SENTINEL: i64 = i64::MIN;

/// Resolution tag of an epoch count.
///
/// `Nanosecond` through `Hour` are fixed-duration units and scale linearly.
/// `Day` through `Year` are calendar resolutions: the count names a calendar
/// date that is materialized before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpochUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    /// Days since 1970-01-01.
    Day,
    /// Seven-day weeks since 1970-01-01.
    Week,
    /// Calendar months since 1970-01.
    Month,
    /// Calendar years since 1970.
    Year,
}

impl EpochUnit {
    /// Returns true for units that count calendar dates rather than durations.
    pub fn is_calendar(self) -> bool {
        matches!(self, Self::Day | Self::Week | Self::Month | Self::Year)
    }

    /// Short unit code as used in `datetime64[<code>]` dtype strings.
    pub fn code(self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "us",
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
            Self::Year => "Y",
        }
    }
}

impl fmt::Display for EpochUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EpochUnit {
    type Err = TemporalError;

    /// Parses a unit code, accepting both the bare code (`"ms"`) and the
    /// dtype form (`"datetime64[ms]"`). Codes are case-sensitive because
    /// `"m"` (minute) and `"M"` (month) differ only by case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code = trimmed
            .strip_prefix("datetime64[")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        match code {
            "ns" => Ok(Self::Nanosecond),
            "us" | "μs" => Ok(Self::Microsecond),
            "ms" => Ok(Self::Millisecond),
            "s" => Ok(Self::Second),
            "m" => Ok(Self::Minute),
            "h" => Ok(Self::Hour),
            "D" => Ok(Self::Day),
            "W" => Ok(Self::Week),
            "M" => Ok(Self::Month),
            "Y" => Ok(Self::Year),
            _ => Err(TemporalError::UnknownUnit {
                code: s.to_string(),
            }),
        }
    }
}

/// A date without time of day.
///
/// Fields are stored as received; impossible combinations (month 13,
/// February 30) are representable and rejected at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Returns the chrono date if the fields name a real calendar day.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// A fully decomposed wall-clock date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

impl CalendarDateTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// The date portion, time of day dropped.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::new(self.year, self.month, self.day)
    }

    /// Returns true when hour, minute, second and microsecond are all zero.
    pub fn is_midnight(&self) -> bool {
        (self.hour, self.minute, self.second, self.microsecond) == (0, 0, 0, 0)
    }

    /// Returns the chrono date-time if every field is in range.
    ///
    /// `microsecond` must be below one second; chrono's leap-second
    /// representation is not accepted as a calendar field.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        if self.microsecond >= 1_000_000 {
            return None;
        }
        let date = self.date().to_naive()?;
        let time =
            NaiveTime::from_hms_micro_opt(self.hour, self.minute, self.second, self.microsecond)?;
        Some(NaiveDateTime::new(date, time))
    }
}

impl From<NaiveDateTime> for CalendarDateTime {
    /// Sub-microsecond precision is dropped.
    fn from(dt: NaiveDateTime) -> Self {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.nanosecond() / 1_000,
        )
    }
}

/// Any temporal value the ingestion layer may hand to the normalizer.
///
/// Exactly one variant is active. [`TemporalInput::Missing`] short-circuits
/// every operation to a null result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemporalInput {
    /// Epoch value of unknown unit (seconds or milliseconds).
    RawNumber { value: f64 },
    /// Epoch count with an explicit resolution.
    TypedEpoch { value: i64, unit: EpochUnit },
    CalendarDateTime(CalendarDateTime),
    CalendarDate(CalendarDate),
    /// Interval value; only its start is used.
    Period { start: Box<TemporalInput> },
    Missing,
}

impl TemporalInput {
    pub fn raw(value: f64) -> Self {
        Self::RawNumber { value }
    }

    pub fn typed(value: i64, unit: EpochUnit) -> Self {
        Self::TypedEpoch { value, unit }
    }

    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::CalendarDate(CalendarDate::new(year, month, day))
    }

    pub fn period(start: TemporalInput) -> Self {
        Self::Period {
            start: Box::new(start),
        }
    }

    /// Returns true for [`TemporalInput::Missing`] and for typed epochs
    /// holding [`NAT_SENTINEL`].
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Self::Missing
                | Self::TypedEpoch {
                    value: NAT_SENTINEL,
                    ..
                }
        )
    }
}

impl From<NaiveDate> for TemporalInput {
    fn from(date: NaiveDate) -> Self {
        Self::CalendarDate(date.into())
    }
}

impl From<NaiveDateTime> for TemporalInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::CalendarDateTime(dt.into())
    }
}

impl<T: Into<TemporalInput>> From<Option<T>> for TemporalInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_codes_parse_both_forms() {
        assert_eq!("ms".parse::<EpochUnit>().unwrap(), EpochUnit::Millisecond);
        assert_eq!(
            "datetime64[ns]".parse::<EpochUnit>().unwrap(),
            EpochUnit::Nanosecond
        );
        assert_eq!("M".parse::<EpochUnit>().unwrap(), EpochUnit::Month);
        assert_eq!("m".parse::<EpochUnit>().unwrap(), EpochUnit::Minute);
        assert!("fortnight".parse::<EpochUnit>().is_err());
    }

    #[test]
    fn unit_code_display_round_trips() {
        for unit in [
            EpochUnit::Nanosecond,
            EpochUnit::Microsecond,
            EpochUnit::Millisecond,
            EpochUnit::Second,
            EpochUnit::Minute,
            EpochUnit::Hour,
            EpochUnit::Day,
            EpochUnit::Week,
            EpochUnit::Month,
            EpochUnit::Year,
        ] {
            assert_eq!(unit.to_string().parse::<EpochUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn calendar_units() {
        assert!(EpochUnit::Day.is_calendar());
        assert!(EpochUnit::Year.is_calendar());
        assert!(!EpochUnit::Hour.is_calendar());
        assert!(!EpochUnit::Nanosecond.is_calendar());
    }

    #[test]
    fn impossible_dates_have_no_naive_form() {
        assert!(CalendarDate::new(2023, 2, 30).to_naive().is_none());
        assert!(CalendarDate::new(2023, 13, 1).to_naive().is_none());
        assert!(
            CalendarDateTime::new(2023, 1, 1, 24, 0, 0, 0)
                .to_naive()
                .is_none()
        );
        assert!(
            CalendarDateTime::new(2023, 1, 1, 0, 0, 0, 1_000_000)
                .to_naive()
                .is_none()
        );
    }

    #[test]
    fn leap_second_microseconds_are_rejected() {
        assert!(
            CalendarDateTime::new(2023, 11, 5, 23, 59, 59, 1_500_000)
                .to_naive()
                .is_none()
        );
        assert!(
            CalendarDateTime::new(2023, 11, 5, 23, 59, 59, 999_999)
                .to_naive()
                .is_some()
        );
    }

    #[test]
    fn nat_sentinel_is_missing() {
        assert!(TemporalInput::Missing.is_missing());
        assert!(TemporalInput::typed(NAT_SENTINEL, EpochUnit::Nanosecond).is_missing());
        assert!(!TemporalInput::typed(0, EpochUnit::Nanosecond).is_missing());
        assert!(!TemporalInput::raw(f64::NAN).is_missing());
    }

    #[test]
    fn option_none_becomes_missing() {
        let none: Option<NaiveDate> = None;
        assert_eq!(TemporalInput::from(none), TemporalInput::Missing);

        let some = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert_eq!(TemporalInput::from(some), TemporalInput::date(2024, 2, 29));
    }

    #[test]
    fn datetime_conversion_drops_nanoseconds() {
        let dt = NaiveDate::from_ymd_opt(2023, 11, 5)
            .unwrap()
            .and_hms_nano_opt(13, 45, 0, 123_456_789)
            .unwrap();
        let converted = CalendarDateTime::from(dt);
        assert_eq!(converted.microsecond, 123_456);
        assert!(!converted.is_midnight());
    }
}
