//! Web layer for the park trip planner.
//!
//! Serves the planner pages and the JSON endpoints for location search,
//! day allocation, itineraries, alerts, entrances, trails and routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LocationResolver};
pub use templates::*;
