//! Domain types for the park trip planner.
//!
//! This module contains the core model: parks and their tiers, the
//! static park catalog, pace preferences, activities, trip dates and
//! location candidates. Types validate their inputs at construction
//! time so the allocator and itinerary code can trust them.

mod activity;
mod catalog;
mod dates;
mod error;
mod location;
mod pace;
mod park;

pub use activity::{Activity, ActivityCategory, ActivityId, web_link};
pub use catalog::{ParkInfo, find_park, park_catalog};
pub use dates::{DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, TripDates, trip_length};
pub use error::DomainError;
pub use location::{Coordinate, LocationCandidate, LocationKind, RegionContext};
pub use pace::Pace;
pub use park::{Tier, TripPark};
