//! Server startup: build the state from configuration, bind and serve.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::airports::AirportDirectory;
use crate::cache::{CacheConfig, CachedNpsClient, CachedPlaces};
use crate::config::ServerConfig;
use crate::geocoding::{GeocodingClient, GeocodingConfig};
use crate::nps::{NpsClient, NpsConfig};
use crate::resolver::{Resolver, ResolverConfig};
use crate::routing::{RoutingClient, RoutingConfig};
use crate::trails::TrailDirectory;
use crate::web::{AppState, create_router};

/// How often the place-search cache is dropped wholesale (6 hours).
const PLACES_FLUSH_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Build the application state.
///
/// Missing data files give empty directories and missing keys leave the
/// matching client unset; both are logged, neither is fatal.
pub fn build_state(config: &ServerConfig) -> AppState {
    let timeout = config.http_timeout_secs;

    let airports = AirportDirectory::load(&config.airports_path).unwrap_or_else(|e| {
        warn!(path = %config.airports_path.display(), error = %e, "airport directory unavailable");
        AirportDirectory::default()
    });
    let trails = TrailDirectory::load(&config.trails_path).unwrap_or_else(|e| {
        warn!(path = %config.trails_path.display(), error = %e, "trail directory unavailable");
        TrailDirectory::default()
    });
    info!(airports = airports.len(), trails = trails.len(), "directories loaded");

    let cache_config = CacheConfig::default();

    let geocoder = config.mapbox_token.as_ref().and_then(|token| {
        GeocodingClient::new(GeocodingConfig::new(token).with_timeout(timeout))
            .inspect_err(|e| warn!(error = %e, "geocoding client unavailable"))
            .ok()
    });
    let routing = config.mapbox_token.as_ref().and_then(|token| {
        RoutingClient::new(RoutingConfig::new(token).with_timeout(timeout))
            .inspect_err(|e| warn!(error = %e, "routing client unavailable"))
            .ok()
    });
    let nps = config.nps_api_key.as_ref().and_then(|key| {
        NpsClient::new(NpsConfig::new(key).with_timeout(timeout))
            .inspect_err(|e| warn!(error = %e, "NPS client unavailable"))
            .ok()
            .map(|client| CachedNpsClient::new(client, &cache_config))
    });

    let places = CachedPlaces::new(geocoder, &cache_config);
    let resolver = Resolver::new(airports, places, ResolverConfig::default());
    AppState::new(resolver, nps, trails, routing)
}

/// Bind the configured address and serve until the server stops.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let state = build_state(&config);

    let flush_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PLACES_FLUSH_INTERVAL);
        interval.tick().await;
        loop {
            interval.tick().await;
            flush_state.resolver.places().invalidate_all();
            info!("place search cache flushed");
        }
    });

    let static_dir = config.static_dir.to_string_lossy();
    let app = create_router(state, &static_dir);

    info!("Park trip planner listening on http://{addr}");
    info!("  GET  /health                     - Health check");
    info!("  GET  /itinerary                  - Itinerary page");
    info!("  GET  /api/locations/search?q=    - Starting-point suggestions");
    info!("  POST /api/trip/allocate          - Split days across parks");
    info!("  POST /api/trip/rebalance         - Set one park's days");
    info!("  POST /api/itinerary              - Composed itinerary");
    info!("  GET  /api/alerts?parkCode=       - Park alerts");
    info!("  GET  /api/parks/:code/entrance   - Park entrance");
    info!("  GET  /api/trails?parks=          - Trails by park");
    info!("  POST /api/route                  - Driving route");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;

    fn config(port: u16) -> ServerConfig {
        ServerConfig {
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            airports_path: PathBuf::from("does/not/exist.json"),
            trails_path: PathBuf::from("data/trails.json"),
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn port_in_use_is_an_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = run(config(port)).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { addr, .. } if addr.port() == port));
    }

    #[test]
    fn state_degrades_without_keys_or_files() {
        let state = build_state(&config(0));
        assert!(state.nps.is_none());
        assert!(state.routing.is_none());
        assert!(state.resolver.airports().is_empty());
        assert!(!state.trails.is_empty());
    }
}
