//! Wall-clock ↔ instant conversion under an explicit timezone rule.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};
use tempo_model::{Result, TemporalError, TimezoneRule};

/// Converts a wall-clock date-time to epoch milliseconds.
///
/// Sub-millisecond precision is truncated. Under [`TimezoneRule::Local`] an
/// ambiguous wall clock (autumn fold) resolves to the earlier instant; a
/// non-existent one (spring gap) is an error.
pub(crate) fn wall_clock_to_millis(wall: NaiveDateTime, rule: TimezoneRule) -> Result<i64> {
    match rule {
        TimezoneRule::Utc => Ok(wall.and_utc().timestamp_millis()),
        TimezoneRule::FixedOffset { seconds_east } => {
            let offset = fixed_offset(seconds_east)?;
            resolve(offset.from_local_datetime(&wall), wall)
        }
        TimezoneRule::Local => resolve(Local.from_local_datetime(&wall), wall),
    }
}

/// Converts epoch milliseconds to the wall clock seen under `rule`.
pub(crate) fn millis_to_wall_clock(millis: i64, rule: TimezoneRule) -> Result<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(millis)
        .ok_or(TemporalError::UnrepresentableInstant { millis })?;

    match rule {
        TimezoneRule::Utc => Ok(utc.naive_utc()),
        TimezoneRule::FixedOffset { seconds_east } => {
            Ok(utc.with_timezone(&fixed_offset(seconds_east)?).naive_local())
        }
        TimezoneRule::Local => Ok(utc.with_timezone(&Local).naive_local()),
    }
}

fn fixed_offset(seconds_east: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(seconds_east).ok_or(TemporalError::InvalidOffset { seconds_east })
}

fn resolve<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>, wall: NaiveDateTime) -> Result<i64> {
    result
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| TemporalError::NonexistentLocalTime {
            wall_clock: wall.to_string(),
        })
}
