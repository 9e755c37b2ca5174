//! The per-park day mapping.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::MAX_TRIP_DAYS;

/// Errors from allocation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// The park to rebalance is not part of the allocation
    #[error("park not in allocation: {0}")]
    UnknownPark(String),

    #[error("park listed twice in allocation: {0}")]
    DuplicatePark(String),

    /// A park's count is zero or longer than any trip
    #[error("{park} has {days} days (expected 1 to {MAX_TRIP_DAYS})")]
    InvalidDays { park: String, days: u32 },

    #[error("trip of {days} days is too long (at most {MAX_TRIP_DAYS})")]
    TripTooLong { days: u64 },
}

/// Days allocated to one park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkDays {
    pub park: String,
    pub days: u32,
}

/// Ordered park → day-count mapping, in trip order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayAllocation {
    entries: Vec<ParkDays>,
}

impl DayAllocation {
    pub fn new(entries: Vec<ParkDays>) -> Self {
        Self { entries }
    }

    pub(crate) fn from_parts(parks: impl IntoIterator<Item = String>, days: Vec<u32>) -> Self {
        let entries = parks
            .into_iter()
            .zip(days)
            .map(|(park, days)| ParkDays { park, days })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ParkDays] {
        &self.entries
    }

    /// Days allocated to a park, if present.
    pub fn get(&self, park: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.park == park).map(|e| e.days)
    }

    pub(crate) fn index_of(&self, park: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.park == park)
    }

    pub(crate) fn day_counts(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.days).collect()
    }

    /// Sum of all allocated days, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        let sum: u64 = self.entries.iter().map(|e| u64::from(e.days)).sum();
        u32::try_from(sum).unwrap_or(u32::MAX)
    }

    /// Check an allocation that came from outside: unique parks, each
    /// with 1 to [`MAX_TRIP_DAYS`] days.
    pub fn validate(&self) -> Result<(), AllocationError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.park.as_str()) {
                return Err(AllocationError::DuplicatePark(entry.park.clone()));
            }
            if !(1..=MAX_TRIP_DAYS).contains(&entry.days) {
                return Err(AllocationError::InvalidDays {
                    park: entry.park.clone(),
                    days: entry.days,
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParkDays> {
        self.entries.iter()
    }
}
