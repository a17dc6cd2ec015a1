//! Conversion of temporal inputs to canonical forms.
//!
//! - `epoch`: raw and typed epoch counts
//! - `calendar`: calendar values and date-part decomposition
//! - `text`: best-effort parsing of free-text dates
//! - `zone`, `rounding`: timezone rule and sub-millisecond rounding helpers

pub(crate) mod calendar;
pub(crate) mod epoch;
mod rounding;
pub(crate) mod text;
mod zone;

pub use epoch::SUPPORTED_YEARS;
pub use text::{parse_datetime, parse_time_of_day};
