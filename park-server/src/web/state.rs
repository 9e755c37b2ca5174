//! Application state for the web layer.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::airports::AirportDirectory;
use crate::cache::{CachedNpsClient, CachedPlaces};
use crate::geocoding::GeocodingClient;
use crate::nps::{Alert, alerts_by_park};
use crate::resolver::Resolver;
use crate::routing::RoutingClient;
use crate::trails::TrailDirectory;

/// The resolver as wired in the server: bundled airports plus the
/// (possibly unconfigured) cached geocoder.
pub type LocationResolver = Resolver<AirportDirectory, CachedPlaces<Option<GeocodingClient>>>;

/// Shared application state.
///
/// Upstream clients are optional; a missing one means its API key was
/// not configured and the matching endpoints degrade.
#[derive(Clone)]
pub struct AppState {
    /// Starting-point resolver
    pub resolver: Arc<LocationResolver>,

    /// Cached NPS client for alerts and entrances
    pub nps: Option<Arc<CachedNpsClient>>,

    /// Trail records
    pub trails: TrailDirectory,

    /// Driving directions
    pub routing: Option<Arc<RoutingClient>>,
}

impl AppState {
    pub fn new(
        resolver: LocationResolver,
        nps: Option<CachedNpsClient>,
        trails: TrailDirectory,
        routing: Option<RoutingClient>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            nps: nps.map(Arc::new),
            trails,
            routing: routing.map(Arc::new),
        }
    }

    /// Alerts per park code. Empty for every park when NPS is not
    /// configured.
    pub async fn alerts_by_park(&self, park_codes: &[String]) -> HashMap<String, Vec<Alert>> {
        match &self.nps {
            Some(nps) => alerts_by_park(nps.as_ref(), park_codes).await,
            None => {
                debug!("NPS not configured, skipping alerts");
                HashMap::new()
            }
        }
    }
}
