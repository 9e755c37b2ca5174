//! Trip date ranges.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Trip length assumed when the user has not picked dates.
pub const DEFAULT_TRIP_DAYS: u32 = 3;

/// Longest trip the planner lays out, in days.
pub const MAX_TRIP_DAYS: u32 = 90;

/// An inclusive start/end date pair.
///
/// The end is never before the start, so a range always spans at least
/// one day, and never more than [`MAX_TRIP_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDates {
    start: NaiveDate,
    end: NaiveDate,
}

impl TripDates {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::EndBeforeStart { start, end });
        }
        let days = (end - start).num_days() + 1;
        if days > i64::from(MAX_TRIP_DAYS) {
            return Err(DomainError::TripTooLong {
                days,
                max: MAX_TRIP_DAYS,
            });
        }
        Ok(Self { start, end })
    }

    /// Parse ISO `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| DomainError::InvalidDate(s.to_string()))
        };
        Self::new(parse(start)?, parse(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn total_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    /// Calendar date of a 1-based trip day, if it falls inside the range.
    pub fn date_of_day(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.total_days() {
            return None;
        }
        Some(self.start + Duration::days(i64::from(day) - 1))
    }

    /// "Jun 3 - Jun 8, 2026", or with both years when the range crosses
    /// a year boundary.
    pub fn display_range(&self) -> String {
        if self.start == self.end {
            return self.start.format("%b %-d, %Y").to_string();
        }
        if self.start.year() == self.end.year() {
            format!(
                "{} - {}",
                self.start.format("%b %-d"),
                self.end.format("%b %-d, %Y")
            )
        } else {
            format!(
                "{} - {}",
                self.start.format("%b %-d, %Y"),
                self.end.format("%b %-d, %Y")
            )
        }
    }
}

/// Trip length for optional dates, falling back to the default.
pub fn trip_length(dates: Option<&TripDates>) -> u32 {
    dates.map(TripDates::total_days).unwrap_or(DEFAULT_TRIP_DAYS)
}
