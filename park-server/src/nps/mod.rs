//! National Park Service data API client.
//!
//! Two endpoints are used: `/alerts` for current park alerts and
//! `/parks` for park metadata (entrance coordinates). Alert lookups
//! degrade to an empty list on any failure; entrance lookups fall back
//! to the static park catalog.

mod client;
mod error;
mod types;

use std::collections::HashMap;
use std::future::Future;

use futures::future::join_all;
use tracing::warn;

use crate::domain::{Coordinate, find_park};

pub use client::{NpsClient, NpsConfig};
pub use error::NpsError;
pub use types::{Alert, AlertDto, AlertsResponse, Entrance, EntranceSource, ParkDto, ParksResponse};

/// Anything that can fetch the alerts of a single park.
pub trait AlertSource: Send + Sync {
    fn park_alerts(&self, park_code: &str) -> impl Future<Output = Result<Vec<Alert>, NpsError>> + Send;
}

/// Fetch alerts for several parks concurrently.
///
/// A park whose fetch fails maps to an empty list; the others are
/// unaffected.
pub async fn alerts_by_park<S: AlertSource>(
    source: &S,
    park_codes: &[String],
) -> HashMap<String, Vec<Alert>> {
    let fetches = park_codes.iter().map(|code| async move {
        let alerts = source.park_alerts(code).await.unwrap_or_else(|e| {
            warn!(park_code = %code, error = %e, "alerts fetch failed");
            Vec::new()
        });
        (code.clone(), alerts)
    });
    join_all(fetches).await.into_iter().collect()
}

/// Combine an entrance lookup with the static catalog.
///
/// The catalog is used when the lookup failed or had no coordinates.
/// Returns `None` only for parks unknown to both.
pub fn entrance_with_fallback(
    park_code: &str,
    fetched: Result<Option<Coordinate>, NpsError>,
) -> Option<Entrance> {
    let code = park_code.trim().to_lowercase();
    let fetched = fetched.unwrap_or_else(|e| {
        warn!(park_code = %code, error = %e, "park metadata fetch failed");
        None
    });

    match fetched {
        Some(coordinate) => Some(Entrance {
            park_code: code,
            coordinate,
            source: EntranceSource::Nps,
        }),
        None => find_park(&code).map(|p| Entrance {
            park_code: p.code.to_string(),
            coordinate: p.entrance,
            source: EntranceSource::Catalog,
        }),
    }
}
