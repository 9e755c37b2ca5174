//! Geographic coordinates and location-search candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse from the `[lon, lat]` ordering used by GeoJSON.
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self::new(pair[1], pair[0])
    }

    /// Format as `lon,lat` for routing URLs.
    pub fn to_lon_lat_string(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

/// Category tag of a location candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// A street address
    Address,
    /// A city, town or other locality
    Place,
    /// An airport, from the directory or the geocoder
    Airport,
    /// Any other point of interest
    Poi,
}

/// One entry of a candidate's containing-region breadcrumb.
///
/// `id` carries the geocoder's layer prefix (`place.123`, `region.456`),
/// which is how the formatter finds the locality and state entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionContext {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

impl RegionContext {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            short_code: None,
        }
    }

    pub fn with_short_code(mut self, code: impl Into<String>) -> Self {
        self.short_code = Some(code.into());
        self
    }

    /// The layer name before the first dot (`"region"` for `region.456`).
    pub fn layer(&self) -> &str {
        self.id.split('.').next().unwrap_or("")
    }
}

/// A single suggestion for the starting-point picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Full descriptive label, e.g. "Las Vegas, Nevada, United States"
    pub label: String,
    /// Primary name without the trailing region parts
    pub name: String,
    pub kind: LocationKind,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub context: Vec<RegionContext>,
    /// Source relevance in `[0, 1]`
    pub relevance: f64,
    /// IATA code for directory airports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_code: Option<String>,
}

impl LocationCandidate {
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        kind: LocationKind,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            kind,
            coordinate,
            context: Vec::new(),
            relevance: 1.0,
            airport_code: None,
        }
    }

    pub fn with_context(mut self, context: Vec<RegionContext>) -> Self {
        self.context = context;
        self
    }

    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn with_airport_code(mut self, code: impl Into<String>) -> Self {
        self.airport_code = Some(code.into());
        self
    }

    /// Key used to drop repeats within one source: the airport code for
    /// directory airports, the full label otherwise, so same-named
    /// places in different states stay apart.
    pub fn dedup_key(&self) -> String {
        match &self.airport_code {
            Some(code) => format!("airport:{}", code.trim().to_uppercase()),
            None => self.label.trim().to_lowercase(),
        }
    }

    /// Whether this candidate should be treated as an airport when ranking,
    /// regardless of its raw category.
    pub fn is_airport_like(&self) -> bool {
        self.kind == LocationKind::Airport
            || self.airport_code.is_some()
            || self.label.to_lowercase().contains("airport")
    }

    /// First breadcrumb entry on the given layer.
    pub fn context_layer(&self, layer: &str) -> Option<&RegionContext> {
        self.context.iter().find(|c| c.layer() == layer)
    }
}
