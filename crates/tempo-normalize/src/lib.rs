//! Temporal normalization engine for schema-free data ingestion.
//!
//! Converts heterogeneous temporal values into one canonical form and
//! classifies untyped text, so an ingestion layer can type columns without a
//! caller-supplied schema.
//!
//! # Overview
//!
//! - **Canonicalization**: [`normalize_to_millis`] maps raw epoch numbers of
//!   unknown unit, typed epoch counts, calendar values and periods to
//!   milliseconds since the Unix epoch
//! - **Decomposition**: [`decompose_to_date_parts`] reduces any of them to
//!   year, month and day
//! - **Classification**: [`classify_string`] decides whether text is a date,
//!   a date-time, or an opaque string; [`infer_column_kind`] folds that over a
//!   column sample
//!
//! # Design Principles
//!
//! - **Total**: malformed input degrades to `None` or
//!   [`TemporalKind::Opaque`]; the `try_*` methods on [`TemporalNormalizer`]
//!   expose the reason
//! - **Explicit zone**: the wall-clock rule is a [`TimezoneRule`] option
//!   (UTC by default), never an implicit process setting
//! - **Stateless**: pure functions, safe to call from any thread
//!
//! The free functions use [`NormalizerOptions::default()`]; build a
//! [`TemporalNormalizer`] to change the timezone rule or rounding.

mod classify;
mod inference;
mod normalization;
mod normalizer;

pub use classify::{DATE_SEPARATORS, classify_bytes, classify_string, has_date_separator};
pub use inference::infer_column_kind;
pub use normalization::{SUPPORTED_YEARS, parse_datetime, parse_time_of_day};
pub use normalizer::TemporalNormalizer;

pub use tempo_model::{
    CalendarDate, CalendarDateTime, CanonicalMillis, DateParts, EpochUnit, NormalizerOptions,
    SubMillisRounding, TemporalError, TemporalInput, TemporalKind, TimezoneRule,
};

/// Canonicalizes `input` to epoch milliseconds under default options.
pub fn normalize_to_millis(input: &TemporalInput) -> Option<CanonicalMillis> {
    TemporalNormalizer::default().normalize_to_millis(input)
}

/// Decomposes `input` to year, month and day under default options.
pub fn decompose_to_date_parts(input: &TemporalInput) -> Option<DateParts> {
    TemporalNormalizer::default().decompose_to_date_parts(input)
}
