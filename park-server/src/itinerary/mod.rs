//! Day-by-day itinerary view.
//!
//! Lays the trip's parks out over consecutive days according to their
//! allocation, places activities on their days and attaches each park's
//! alerts. This is read-only display logic over a
//! [`TripState`](crate::trip::TripState).

mod compose;
mod filter;

pub use compose::{Itinerary, ItineraryDay, ParkAlerts, format_date_range};
pub use filter::{filter_activities, group_by_day};
