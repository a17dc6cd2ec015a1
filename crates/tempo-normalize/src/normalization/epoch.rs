//! Epoch-count normalization.
//!
//! Raw numbers have an unknown unit and go through the seconds-first policy:
//! a value is read as seconds when that reading lands inside the supported
//! calendar range, otherwise it is already milliseconds. The policy favours
//! seconds, so a millisecond value small enough to also be a valid seconds
//! value is read as seconds.
//!
//! Typed epochs carry their unit. Fixed-duration units scale linearly;
//! calendar units (`D`, `W`, `M`, `Y`) name a date whose midnight is taken
//! under the configured timezone rule.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};
use tempo_model::{EpochUnit, NormalizerOptions, Result, TemporalError, TimezoneRule};

use super::rounding::divide_rounded;
use super::zone::{millis_to_wall_clock, wall_clock_to_millis};

/// Wall-clock years accepted when a raw number is read as seconds.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// 2^63 as f64; every finite value strictly below it (and at or above its
/// negation) truncates into an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Normalizes an ambiguous-unit raw number to milliseconds.
pub(crate) fn raw_number_to_millis(value: f64, rule: TimezoneRule) -> Result<i64> {
    if !value.is_finite() {
        return Err(TemporalError::NonFinite { value });
    }

    match seconds_to_millis(value, rule) {
        Ok(millis) => Ok(millis),
        Err(err) => {
            tracing::debug!(value, %err, "Raw epoch is not a seconds value; reading as milliseconds");
            float_to_i64(value.trunc()).ok_or_else(|| TemporalError::MillisOverflow {
                value: value.to_string(),
                unit: EpochUnit::Millisecond,
            })
        }
    }
}

/// Reads `value` as seconds since epoch.
///
/// Succeeds only when the resulting wall clock lies in [`SUPPORTED_YEARS`].
pub(crate) fn seconds_to_millis(value: f64, rule: TimezoneRule) -> Result<i64> {
    let out_of_range = || TemporalError::SecondsOutOfRange { value };

    let millis = float_to_i64((value * 1_000.0).round()).ok_or_else(out_of_range)?;
    let wall = millis_to_wall_clock(millis, rule).map_err(|_| out_of_range())?;
    if !SUPPORTED_YEARS.contains(&wall.year()) {
        return Err(out_of_range());
    }
    Ok(millis)
}

/// Normalizes an epoch count with an explicit unit to milliseconds.
pub(crate) fn typed_epoch_to_millis(
    value: i64,
    unit: EpochUnit,
    options: &NormalizerOptions,
) -> Result<i64> {
    let rounding = options.sub_millis_rounding;
    match unit {
        EpochUnit::Nanosecond => Ok(divide_rounded(value, 1_000_000, rounding)),
        EpochUnit::Microsecond => Ok(divide_rounded(value, 1_000, rounding)),
        EpochUnit::Millisecond => Ok(value),
        EpochUnit::Second => scale(value, 1_000, unit),
        EpochUnit::Minute => scale(value, 60_000, unit),
        EpochUnit::Hour => scale(value, 3_600_000, unit),
        EpochUnit::Day | EpochUnit::Week | EpochUnit::Month | EpochUnit::Year => {
            let date = materialize_calendar_date(value, unit)?;
            wall_clock_to_millis(date.and_time(NaiveTime::MIN), options.timezone)
        }
    }
}

/// Resolves a calendar-resolution epoch count to the date it names.
pub(crate) fn materialize_calendar_date(value: i64, unit: EpochUnit) -> Result<NaiveDate> {
    let invalid = || TemporalError::InvalidCalendar {
        reason: format!("{value} [{unit}] is outside the calendar range"),
    };
    // NaiveDate defaults to 1970-01-01.
    let epoch = NaiveDate::default();

    let date = match unit {
        EpochUnit::Day => add_days(epoch, Some(value)),
        EpochUnit::Week => add_days(epoch, value.checked_mul(7)),
        EpochUnit::Month => 1970_i64
            .checked_mul(12)
            .and_then(|base| base.checked_add(value))
            .and_then(|months| {
                let year = i32::try_from(months.div_euclid(12)).ok()?;
                let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
                NaiveDate::from_ymd_opt(year, month, 1)
            }),
        EpochUnit::Year => value
            .checked_add(1970)
            .and_then(|year| i32::try_from(year).ok())
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        _ => {
            return Err(TemporalError::InvalidCalendar {
                reason: format!("[{unit}] is not a calendar unit"),
            });
        }
    };

    date.ok_or_else(invalid)
}

fn add_days(epoch: NaiveDate, days: Option<i64>) -> Option<NaiveDate> {
    days.and_then(TimeDelta::try_days)
        .and_then(|delta| epoch.checked_add_signed(delta))
}

fn scale(value: i64, factor: i64, unit: EpochUnit) -> Result<i64> {
    value
        .checked_mul(factor)
        .ok_or_else(|| TemporalError::MillisOverflow {
            value: value.to_string(),
            unit,
        })
}

fn float_to_i64(value: f64) -> Option<i64> {
    // `as` saturates; the explicit bound keeps overflow observable.
    (value >= -I64_BOUND && value < I64_BOUND).then_some(value as i64)
}
