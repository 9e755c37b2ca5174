//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from API/IO errors.

use chrono::NaiveDate;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Trip end date precedes the start date
    #[error("trip ends ({end}) before it starts ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("trip spans {days} days (at most {max} allowed)")]
    TripTooLong { days: i64, max: u32 },

    /// Date string is not `YYYY-MM-DD`
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Unrecognised pace setting
    #[error("unknown pace: {0} (expected relaxed, balanced or packed)")]
    UnknownPace(String),

    /// Unrecognised activity category
    #[error("unknown activity category: {0}")]
    UnknownCategory(String),

    /// Park name is empty after trimming
    #[error("park name must not be empty")]
    EmptyParkName,

    /// Day counts start at 1
    #[error("day index must be at least 1")]
    ZeroDay,

    /// Activity links must be plain web URLs
    #[error("link must be an http or https URL: {0}")]
    UnsafeLink(String),
}
