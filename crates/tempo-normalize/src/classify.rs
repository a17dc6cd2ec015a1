//! Schema-free classification of untyped strings.
//!
//! A string is a `Date` when it parses with a zero time of day, a `Time`
//! when it parses with any non-zero time component, and `Opaque` otherwise.
//! Text without a date separator is never parsed, so digit runs such as
//! `20231105` or record IDs stay strings. A real timestamp that happens to
//! fall exactly on midnight classifies as `Date`.

use chrono::{NaiveTime, Timelike};
use tempo_model::TemporalKind;

use crate::normalization::{parse_datetime, parse_time_of_day};

/// Characters that gate parsing.
pub const DATE_SEPARATORS: [char; 4] = ['/', '.', '-', ' '];

/// Returns true if `text` contains at least one of [`DATE_SEPARATORS`].
pub fn has_date_separator(text: &str) -> bool {
    text.contains(DATE_SEPARATORS)
}

/// Classifies `text` as [`TemporalKind::Date`], [`TemporalKind::Time`] or
/// [`TemporalKind::Opaque`].
pub fn classify_string(text: &str) -> TemporalKind {
    if !has_date_separator(text) {
        return TemporalKind::Opaque;
    }

    let kind = match parse_datetime(text) {
        Some(parsed) => kind_of_time(parsed.time()),
        // A bare time of day is still temporal; no date is invented for it.
        None => parse_time_of_day(text).map_or(TemporalKind::Opaque, kind_of_time),
    };

    tracing::trace!(text, kind = %kind, "Classified string");
    kind
}

/// Classifies UTF-8 encoded text. Invalid UTF-8 is [`TemporalKind::Opaque`].
pub fn classify_bytes(bytes: &[u8]) -> TemporalKind {
    match std::str::from_utf8(bytes) {
        Ok(text) => classify_string(text),
        Err(err) => {
            tracing::debug!(%err, "Undecodable bytes classified as opaque");
            TemporalKind::Opaque
        }
    }
}

/// Midnight to microsecond precision counts as date-only.
fn kind_of_time(time: NaiveTime) -> TemporalKind {
    let micros = time.nanosecond() / 1_000;
    if (time.hour(), time.minute(), time.second(), micros) == (0, 0, 0, 0) {
        TemporalKind::Date
    } else {
        TemporalKind::Time
    }
}
