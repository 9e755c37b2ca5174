//! Caching layer for upstream API responses.
//!
//! Park alerts change during the day, so they are cached for minutes.
//! Entrance coordinates barely change and are cached for a day.
//! Geocoding results are cached per normalised query and type filter so
//! that repeated keystrokes do not re-hit the geocoder.
//!
//! Only successful responses are cached; errors always go upstream.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, LocationCandidate};
use crate::nps::{Alert, AlertSource, NpsClient, NpsError};
use crate::resolver::{PlaceSource, TypeFilter};

/// Geocoding cache key: (lowercased trimmed query, type filter).
type PlaceKey = (String, TypeFilter);

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for park alerts.
    pub alerts_ttl: Duration,

    /// TTL for park entrance coordinates.
    pub entrance_ttl: Duration,

    /// TTL for geocoding results.
    pub places_ttl: Duration,

    /// Maximum number of entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            alerts_ttl: Duration::from_secs(5 * 60),
            entrance_ttl: Duration::from_secs(24 * 60 * 60),
            places_ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

fn build_cache<K, V>(ttl: Duration, max_capacity: u64) -> MokaCache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    MokaCache::builder()
        .time_to_live(ttl)
        .max_capacity(max_capacity)
        .build()
}

fn normalise(query: &str) -> String {
    query.trim().to_lowercase()
}

/// NPS client with caching.
pub struct CachedNpsClient {
    client: NpsClient,
    alerts: MokaCache<String, Arc<Vec<Alert>>>,
    entrances: MokaCache<String, Option<Coordinate>>,
}

impl CachedNpsClient {
    pub fn new(client: NpsClient, config: &CacheConfig) -> Self {
        Self {
            client,
            alerts: build_cache(config.alerts_ttl, config.max_capacity),
            entrances: build_cache(config.entrance_ttl, config.max_capacity),
        }
    }

    /// Alerts for one park, using the cache if available.
    pub async fn alerts(&self, park_code: &str) -> Result<Arc<Vec<Alert>>, NpsError> {
        let key = normalise(park_code);
        if let Some(cached) = self.alerts.get(&key).await {
            return Ok(cached);
        }

        let alerts = Arc::new(self.client.alerts(std::slice::from_ref(&key)).await?);
        self.alerts.insert(key, alerts.clone()).await;
        Ok(alerts)
    }

    /// Entrance coordinate for one park, using the cache if available.
    pub async fn entrance(&self, park_code: &str) -> Result<Option<Coordinate>, NpsError> {
        let key = normalise(park_code);
        if let Some(cached) = self.entrances.get(&key).await {
            return Ok(cached);
        }

        let entrance = self.client.entrance(&key).await?;
        self.entrances.insert(key, entrance).await;
        Ok(entrance)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &NpsClient {
        &self.client
    }

    pub fn cache_entry_count(&self) -> u64 {
        self.alerts.entry_count() + self.entrances.entry_count()
    }
}

impl AlertSource for CachedNpsClient {
    async fn park_alerts(&self, park_code: &str) -> Result<Vec<Alert>, NpsError> {
        Ok(self.alerts(park_code).await?.as_ref().clone())
    }
}

/// Any place source with caching.
pub struct CachedPlaces<P> {
    inner: P,
    results: MokaCache<PlaceKey, Arc<Vec<LocationCandidate>>>,
}

impl<P: PlaceSource> CachedPlaces<P> {
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        Self {
            inner,
            results: build_cache(config.places_ttl, config.max_capacity),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn entry_count(&self) -> u64 {
        self.results.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
    }
}

impl<P: PlaceSource> PlaceSource for CachedPlaces<P> {
    type Error = P::Error;

    async fn search_places(
        &self,
        query: &str,
        filter: TypeFilter,
    ) -> Result<Vec<LocationCandidate>, P::Error> {
        let key = (normalise(query), filter);
        if let Some(cached) = self.results.get(&key).await {
            return Ok(cached.as_ref().clone());
        }

        let results = self.inner.search_places(query, filter).await?;
        self.results.insert(key, Arc::new(results.clone())).await;
        Ok(results)
    }
}
