//! Column-level temporal kind inference from sampled string values.
//!
//! Priority order (highest to lowest):
//! 1. Any non-empty sample that is `Opaque` makes the column `Opaque`
//! 2. Any `Time` sample makes the column `Time`
//! 3. At least one `Date` sample makes the column `Date`
//! 4. No usable sample: `Opaque`
//!
//! The result depends only on which kinds occur, never on sample order.

use tempo_model::TemporalKind;

use crate::classify::classify_string;

/// Infer a column's temporal kind from sampled cell values.
///
/// Empty and whitespace-only samples are skipped as missing cells.
pub fn infer_column_kind<'a, I>(values: I) -> TemporalKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut saw_date = false;
    let mut saw_time = false;

    for value in values {
        if value.trim().is_empty() {
            continue;
        }
        match classify_string(value) {
            TemporalKind::Opaque => {
                tracing::debug!(value, "Non-temporal sample; column stays a string");
                return TemporalKind::Opaque;
            }
            TemporalKind::Time => saw_time = true,
            TemporalKind::Date => saw_date = true,
        }
    }

    if saw_time {
        TemporalKind::Time
    } else if saw_date {
        TemporalKind::Date
    } else {
        TemporalKind::Opaque
    }
}
