//! Driving directions client.
//!
//! Requests a route through an ordered list of waypoints from a
//! Mapbox-style directions endpoint and returns the GeoJSON line plus
//! distance and duration for map display.

mod client;
mod error;
mod types;

pub use client::{RoutingClient, RoutingConfig};
pub use error::RoutingError;
pub use types::{DirectionsResponse, LineString, RouteDto, RouteSummary};
