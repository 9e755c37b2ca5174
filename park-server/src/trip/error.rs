//! Trip state error types.

use crate::allocator::AllocationError;
use crate::domain::{ActivityId, DomainError};

/// Errors from trip state transitions and query parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// The park is already part of the trip
    #[error("park already in trip: {0}")]
    DuplicatePark(String),

    /// The park is not part of the trip
    #[error("park not in trip: {0}")]
    UnknownPark(String),

    /// No activity has this id
    #[error("no activity with id {0}")]
    UnknownActivity(ActivityId),

    /// Only one of start and end was given
    #[error("both start and end dates are required")]
    IncompleteDates,
}
