//! Best-effort parsing of free-text date strings.
//!
//! Tries a fixed, ordered list of layouts. Slash-separated dates are read
//! month-first before day-first, so `03/04/2023` is March 4th. Offsets in
//! zoned strings are discarded and the wall clock is kept, since the
//! canonical millisecond form carries no zone.
//!
//! `%B` and `%A` accept both full and abbreviated names when parsing.
//!
//! chrono's `%Y` takes as few as one digit, so `"Nov 2023"` also fits
//! `%B %d %Y` as day 20 of year 23. Matches with a year below
//! [`MIN_TEXT_YEAR`] are discarded and the next layout is tried. Second 60
//! (chrono's leap-second form) is rejected the same way.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Smallest year accepted from text; shorter year fields are digit fragments.
const MIN_TEXT_YEAR: i32 = 1000;

/// Layouts carrying an explicit UTC offset.
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

const DATETIME_FORMATS: &[&str] = &[
    // ISO 8601
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    // US: 11/05/2023 13:45
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    // European: 25/12/2023 13:45
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
    // Month names: 05-Nov-2023 13:45, Nov 5 2023 13:45
    "%d-%B-%Y %H:%M:%S%.f",
    "%d-%B-%Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d, %Y %H:%M:%S%.f",
    "%B %d, %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y", // US: 11/05/2023
    "%d/%m/%Y", // European: 25/12/2023
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d.%m.%Y", // German: 05.11.2023
    "%d-%B-%Y", // 05-Nov-2023
    "%Y-%B-%d", // 2023-Nov-05
    "%d %B %Y", // 5 November 2023
    "%B %d %Y",
    "%B %d, %Y", // November 5, 2023
    "%A %B %d %Y",
    "%A, %B %d, %Y",
    "%A, %d %B %Y",
];

/// Year-month layouts; parsed against the value with `" 01"` appended.
const YEAR_MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%m/%Y", "%B %Y", "%B, %Y"];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I %p",
];

/// Parses a free-text date or date-time.
///
/// Date-only and year-month values are returned at midnight (year-month on
/// the first of the month). Returns `None` when no layout matches or the
/// text names only a time of day.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    try_parse_zoned(trimmed)
        .or_else(|| try_parse_datetime(trimmed))
        .or_else(|| try_parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
        .or_else(|| try_parse_year_month(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

/// Parses a time of day with no date (`"1:45 PM"`, `"13:45:00"`).
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    TIME_FORMATS.iter().find_map(|fmt| {
        NaiveTime::parse_from_str(trimmed, fmt)
            .ok()
            .filter(|time| !is_leap_second(time))
    })
}

fn try_parse_zoned(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local())
        .filter(is_plausible_datetime)
        .or_else(|| {
            DateTime::parse_from_rfc2822(value)
                .ok()
                .map(|dt| dt.naive_local())
                .filter(is_plausible_datetime)
        })
        .or_else(|| {
            ZONED_FORMATS.iter().find_map(|fmt| {
                DateTime::parse_from_str(value, fmt)
                    .ok()
                    .map(|dt| dt.naive_local())
                    .filter(is_plausible_datetime)
            })
        })
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(value, fmt)
            .ok()
            .filter(is_plausible_datetime)
    })
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(value, fmt)
            .ok()
            .filter(is_plausible_date)
    })
}

fn try_parse_year_month(value: &str) -> Option<NaiveDate> {
    let padded = format!("{value} 01");
    YEAR_MONTH_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&padded, &format!("{fmt} %d"))
            .ok()
            .filter(is_plausible_date)
    })
}

fn is_plausible_date(date: &NaiveDate) -> bool {
    date.year() >= MIN_TEXT_YEAR
}

fn is_plausible_datetime(dt: &NaiveDateTime) -> bool {
    is_plausible_date(&dt.date()) && !is_leap_second(&dt.time())
}

fn is_leap_second(time: &NaiveTime) -> bool {
    time.nanosecond() >= 1_000_000_000
}
