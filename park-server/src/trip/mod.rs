//! Trip configuration and its state transitions.
//!
//! [`TripState`] is the single owner of a trip's parks, dates, pace,
//! preferences, activities and day allocation. Every user action is one
//! method call that either applies completely or returns an error and
//! leaves the state untouched. [`TripQuery`] carries the shareable part
//! of a trip through URL query parameters.

mod error;
mod query;
mod state;

pub use error::TripError;
pub use query::{TripQuery, TripQueryParams, parse_dates};
pub use state::{Preferences, TripState};
