//! Error types for strict temporal conversions.
//!
//! The public normalization operations never surface these; they degrade to
//! a null result. The `try_*` variants return them to callers that want the
//! reason a cell was dropped.

use thiserror::Error;

use crate::input::EpochUnit;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemporalError {
    /// Raw number is NaN or infinite.
    #[error("non-finite epoch value: {value}")]
    NonFinite { value: f64 },

    /// Raw number read as seconds falls outside years 1..=9999.
    #[error("{value} seconds since epoch is outside the representable calendar range")]
    SecondsOutOfRange { value: f64 },

    /// Scaling to milliseconds overflowed a signed 64-bit integer.
    #[error("{value} {unit} does not fit in 64-bit milliseconds")]
    MillisOverflow { value: String, unit: EpochUnit },

    /// Calendar fields do not name a real date or time.
    #[error("invalid calendar value: {reason}")]
    InvalidCalendar { reason: String },

    /// Millisecond count cannot be expressed as a calendar instant.
    #[error("instant {millis}ms is outside the representable calendar range")]
    UnrepresentableInstant { millis: i64 },

    /// Wall-clock time falls in a local-time gap (e.g. spring-forward).
    #[error("local time {wall_clock} does not exist in the host timezone")]
    NonexistentLocalTime { wall_clock: String },

    /// Fixed offset outside ±86_399 seconds.
    #[error("invalid UTC offset: {seconds_east} seconds")]
    InvalidOffset { seconds_east: i32 },

    /// Unit code not recognized.
    #[error("unknown epoch unit '{code}'")]
    UnknownUnit { code: String },
}

/// Result type for strict temporal conversions.
pub type Result<T> = std::result::Result<T, TemporalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemporalError::MillisOverflow {
            value: "9223372036854775807".to_string(),
            unit: EpochUnit::Second,
        };
        assert_eq!(
            err.to_string(),
            "9223372036854775807 s does not fit in 64-bit milliseconds"
        );

        let err = TemporalError::UnknownUnit {
            code: "fortnight".to_string(),
        };
        assert_eq!(err.to_string(), "unknown epoch unit 'fortnight'");
    }
}
