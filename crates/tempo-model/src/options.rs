//! Configuration options for temporal normalization.

use serde::{Deserialize, Serialize};

/// Rule mapping between wall-clock calendar values and epoch instants.
///
/// Applies to the seconds range check on raw numbers, to calendar midnight
/// for date-resolution inputs, and to millisecond-to-date decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TimezoneRule {
    /// Wall clock equals UTC.
    #[default]
    Utc,
    /// Wall clock is UTC shifted east by a constant number of seconds.
    FixedOffset { seconds_east: i32 },
    /// Host timezone, read from the process environment at call time.
    ///
    /// Not reproducible across machines.
    Local,
}

impl TimezoneRule {
    pub fn fixed_offset_hours(hours: i32) -> Self {
        Self::FixedOffset {
            seconds_east: hours * 3_600,
        }
    }
}

/// Rounding applied when nanosecond or microsecond counts are reduced to
/// whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubMillisRounding {
    /// Round half to even (banker's rounding).
    #[default]
    HalfEven,
    /// Round half away from zero.
    HalfAwayFromZero,
    /// Round toward negative infinity.
    Floor,
    /// Round toward zero.
    Truncate,
}

/// Options for temporal normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Wall-clock rule. Default: UTC.
    pub timezone: TimezoneRule,

    /// Sub-millisecond rounding. Default: half to even.
    pub sub_millis_rounding: SubMillisRounding,
}

impl NormalizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timezone(mut self, timezone: TimezoneRule) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_sub_millis_rounding(mut self, rounding: SubMillisRounding) -> Self {
        self.sub_millis_rounding = rounding;
        self
    }
}
