//! Calendar materialization and date-part decomposition.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tempo_model::{CalendarDate, CalendarDateTime, DateParts, Result, TemporalError, TimezoneRule};

use super::zone::{millis_to_wall_clock, wall_clock_to_millis};

/// Validates a date-only value.
pub(crate) fn naive_date(date: &CalendarDate) -> Result<NaiveDate> {
    date.to_naive()
        .ok_or_else(|| TemporalError::InvalidCalendar {
            reason: format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                date.year, date.month, date.day
            ),
        })
}

/// Validates a date-time value.
pub(crate) fn naive_datetime(dt: &CalendarDateTime) -> Result<NaiveDateTime> {
    dt.to_naive().ok_or_else(|| TemporalError::InvalidCalendar {
        reason: format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06} is not a calendar date-time",
            dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second, dt.microsecond
        ),
    })
}

/// Midnight of `date` under `rule`, in epoch milliseconds.
pub(crate) fn calendar_date_to_millis(date: &CalendarDate, rule: TimezoneRule) -> Result<i64> {
    let date = naive_date(date)?;
    wall_clock_to_millis(date.and_time(NaiveTime::MIN), rule)
}

/// Wall clock of `dt` under `rule`, in epoch milliseconds.
///
/// Microseconds below a whole millisecond are truncated.
pub(crate) fn calendar_datetime_to_millis(
    dt: &CalendarDateTime,
    rule: TimezoneRule,
) -> Result<i64> {
    wall_clock_to_millis(naive_datetime(dt)?, rule)
}

/// Calendar date of an epoch-millisecond instant as seen under `rule`.
pub(crate) fn millis_to_date_parts(millis: i64, rule: TimezoneRule) -> Result<DateParts> {
    millis_to_wall_clock(millis, rule).map(|wall| wall.date().into())
}
