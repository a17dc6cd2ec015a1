//! Options-bound entry point for every temporal operation.

use tempo_model::{
    CalendarDateTime, CanonicalMillis, DateParts, NormalizerOptions, Result, TemporalInput,
    TemporalKind,
};

use crate::classify;
use crate::inference;
use crate::normalization::calendar::{
    calendar_date_to_millis, calendar_datetime_to_millis, millis_to_date_parts, naive_date,
    naive_datetime,
};
use crate::normalization::epoch::{
    materialize_calendar_date, raw_number_to_millis, typed_epoch_to_millis,
};
use crate::normalization::parse_datetime;

/// Temporal normalizer bound to one set of [`NormalizerOptions`].
///
/// Holds no state beyond its options; every method is a pure function of its
/// arguments and may be called from any number of threads.
///
/// # Example
///
/// ```
/// use tempo_model::{CanonicalMillis, DateParts, EpochUnit, TemporalInput, TemporalKind};
/// use tempo_normalize::TemporalNormalizer;
///
/// let normalizer = TemporalNormalizer::default();
///
/// assert_eq!(
///     normalizer.normalize_to_millis(&TemporalInput::raw(1_700_000_000.0)),
///     Some(CanonicalMillis::new(1_700_000_000_000))
/// );
/// assert_eq!(
///     normalizer.decompose_to_date_parts(&TemporalInput::typed(19_666, EpochUnit::Day)),
///     Some(DateParts::new(2023, 11, 5))
/// );
/// assert_eq!(normalizer.classify_string("2023-11-05"), TemporalKind::Date);
/// assert_eq!(normalizer.normalize_to_millis(&TemporalInput::Missing), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemporalNormalizer {
    options: NormalizerOptions,
}

impl TemporalNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Canonicalizes any temporal value to epoch milliseconds.
    ///
    /// Missing values, not-a-time sentinels and malformed inputs all yield
    /// `None`; nothing is raised.
    pub fn normalize_to_millis(&self, input: &TemporalInput) -> Option<CanonicalMillis> {
        self.try_normalize_to_millis(input).unwrap_or_else(|err| {
            tracing::debug!(%err, "Temporal value normalized to null");
            None
        })
    }

    /// Like [`normalize_to_millis`](Self::normalize_to_millis), but reports
    /// why a non-missing value could not be converted.
    ///
    /// Missing input is `Ok(None)`.
    pub fn try_normalize_to_millis(&self, input: &TemporalInput) -> Result<Option<CanonicalMillis>> {
        if input.is_missing() {
            return Ok(None);
        }

        let rule = self.options.timezone;
        let millis = match input {
            TemporalInput::Missing => return Ok(None),
            TemporalInput::RawNumber { value } => raw_number_to_millis(*value, rule)?,
            TemporalInput::TypedEpoch { value, unit } => {
                typed_epoch_to_millis(*value, *unit, &self.options)?
            }
            TemporalInput::CalendarDateTime(dt) => calendar_datetime_to_millis(dt, rule)?,
            TemporalInput::CalendarDate(date) => calendar_date_to_millis(date, rule)?,
            TemporalInput::Period { start } => return self.try_normalize_to_millis(start),
        };

        tracing::trace!(input = ?input, millis, "Normalized temporal value");
        Ok(Some(CanonicalMillis::new(millis)))
    }

    /// Reduces any temporal value to year, month and day.
    ///
    /// Calendar values are read directly. Epoch counts are normalized to
    /// milliseconds first and then decomposed under the configured timezone
    /// rule, except calendar-resolution units, which already name a date.
    pub fn decompose_to_date_parts(&self, input: &TemporalInput) -> Option<DateParts> {
        self.try_decompose_to_date_parts(input)
            .unwrap_or_else(|err| {
                tracing::debug!(%err, "Temporal value decomposed to null");
                None
            })
    }

    /// Like [`decompose_to_date_parts`](Self::decompose_to_date_parts), but
    /// reports why a non-missing value could not be decomposed.
    pub fn try_decompose_to_date_parts(&self, input: &TemporalInput) -> Result<Option<DateParts>> {
        if input.is_missing() {
            return Ok(None);
        }

        let parts: DateParts = match input {
            TemporalInput::Missing => return Ok(None),
            TemporalInput::CalendarDate(date) => naive_date(date)?.into(),
            TemporalInput::CalendarDateTime(dt) => naive_datetime(dt)?.date().into(),
            TemporalInput::TypedEpoch { value, unit } if unit.is_calendar() => {
                materialize_calendar_date(*value, *unit)?.into()
            }
            TemporalInput::RawNumber { .. } | TemporalInput::TypedEpoch { .. } => {
                match self.try_normalize_to_millis(input)? {
                    Some(millis) => millis_to_date_parts(millis.get(), self.options.timezone)?,
                    None => return Ok(None),
                }
            }
            TemporalInput::Period { start } => return self.try_decompose_to_date_parts(start),
        };

        Ok(Some(parts))
    }

    /// Classifies untyped text. See [`crate::classify_string`].
    pub fn classify_string(&self, text: &str) -> TemporalKind {
        classify::classify_string(text)
    }

    /// Classifies UTF-8 bytes. See [`crate::classify_bytes`].
    pub fn classify_bytes(&self, bytes: &[u8]) -> TemporalKind {
        classify::classify_bytes(bytes)
    }

    /// Infers a column's kind from sampled values. See
    /// [`crate::infer_column_kind`].
    pub fn infer_column_kind<'a, I>(&self, values: I) -> TemporalKind
    where
        I: IntoIterator<Item = &'a str>,
    {
        inference::infer_column_kind(values)
    }

    /// Parses free text and canonicalizes the parsed wall clock.
    pub fn normalize_text_to_millis(&self, text: &str) -> Option<CanonicalMillis> {
        self.normalize_to_millis(&parsed_input(text)?)
    }

    /// Parses free text and returns its calendar date.
    pub fn decompose_text_to_date_parts(&self, text: &str) -> Option<DateParts> {
        self.decompose_to_date_parts(&parsed_input(text)?)
    }
}

fn parsed_input(text: &str) -> Option<TemporalInput> {
    let parsed = parse_datetime(text);
    if parsed.is_none() {
        tracing::debug!(text, "Unparseable date text normalized to null");
    }
    parsed.map(|dt| TemporalInput::CalendarDateTime(CalendarDateTime::from(dt)))
}
