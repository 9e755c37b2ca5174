//! Day allocation across the parks of a trip.
//!
//! Answers: "given these parks and this many days, how long should we
//! spend in each?" The initial split is weighted by park tier, by how
//! many activities the user has planned in each park, and by pace. When
//! the user then edits one park's count by hand, the other parks absorb
//! the difference so the trip length never changes.
//!
//! Both steps are greedy heuristics. Ties are broken by trip order
//! (stable sorts), which is a policy choice rather than an optimum.

mod allocation;
mod initial;
mod rebalance;


pub use allocation::{AllocationError, DayAllocation, ParkDays};
pub use initial::{allocate_days, park_weights};
pub use rebalance::rebalance;

use crate::domain::DEFAULT_TRIP_DAYS;

/// A zero-day trip is treated as the default trip length.
pub(crate) fn effective_total(total_days: u32) -> u32 {
    if total_days == 0 {
        DEFAULT_TRIP_DAYS
    } else {
        total_days
    }
}
