//! Forward geocoding client.
//!
//! Talks to a Mapbox-style places endpoint and turns its features into
//! [`LocationCandidate`](crate::domain::LocationCandidate)s for the
//! resolver. Searches are restricted to the United States.

mod client;
mod convert;
mod error;
mod types;

pub use client::{GeocodingClient, GeocodingConfig};
pub use convert::feature_to_candidate;
pub use error::GeocodingError;
pub use types::{ContextEntry, Feature, FeatureCollection, FeatureProperties};
