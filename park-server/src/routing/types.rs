//! Directions API DTOs.

use serde::{Deserialize, Serialize};

/// Response from the directions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// One route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub geometry: LineString,
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
}

/// GeoJSON line geometry, `[lon, lat]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

/// Route data handed to the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub geometry: LineString,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteSummary {
    pub fn distance_miles(&self) -> f64 {
        self.distance_meters / 1609.344
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds / 3600.0
    }
}

impl From<RouteDto> for RouteSummary {
    fn from(route: RouteDto) -> Self {
        Self {
            geometry: route.geometry,
            distance_meters: route.distance,
            duration_seconds: route.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions() {
        let json = r#"{"code":"Ok","routes":[{"geometry":{"type":"LineString",
            "coordinates":[[-110.7,43.6],[-110.8,44.4]]},"distance":160934.4,"duration":7200,
            "weight":7300}],"waypoints":[]}"#;
        let resp: DirectionsResponse = serde_json::from_str(json).unwrap();
        let summary = RouteSummary::from(resp.routes[0].clone());
        assert_eq!(summary.geometry.coordinates.len(), 2);
        assert!((summary.distance_miles() - 100.0).abs() < 1e-9);
        assert_eq!(summary.duration_hours(), 2.0);
    }
}
