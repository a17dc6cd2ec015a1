//! Temporal value types shared by the normalization engine and its callers.
//!
//! This crate holds data only:
//! - [`input`]: the tagged [`TemporalInput`] variant accepted by every operation
//! - [`output`]: canonical results ([`CanonicalMillis`], [`DateParts`], [`TemporalKind`])
//! - [`options`]: timezone and rounding configuration
//! - [`error`]: the [`TemporalError`] reported by strict conversions
//!
//! The engine itself lives in `tempo-normalize`.

pub mod error;
pub mod input;
pub mod options;
pub mod output;

pub use error::{Result, TemporalError};
pub use input::{CalendarDate, CalendarDateTime, EpochUnit, NAT_SENTINEL, TemporalInput};
pub use options::{NormalizerOptions, SubMillisRounding, TimezoneRule};
pub use output::{CanonicalMillis, DateParts, TemporalKind};
