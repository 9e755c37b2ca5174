//! National park road-trip planner server.
//!
//! Pick parks and dates, get the trip days split across the parks,
//! place hikes and viewpoints on days, and see the itinerary with
//! current park alerts.

pub mod airports;
pub mod allocator;
pub mod cache;
pub mod config;
pub mod domain;
pub mod geocoding;
pub mod itinerary;
pub mod nps;
pub mod resolver;
pub mod routing;
pub mod server;
pub mod trails;
pub mod trip;
pub mod web;
