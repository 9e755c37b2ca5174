//! Geocoding API response DTOs.
//!
//! These map the subset of the Mapbox places response that the resolver
//! uses. Mapbox omits empty arrays and properties, so most fields default.

use serde::Deserialize;

/// Top-level geocoding response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One geocoding hit.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Layer-prefixed id, e.g. "place.2912".
    #[serde(default)]
    pub id: String,

    /// Primary name, e.g. "Moab".
    pub text: String,

    /// Full label, e.g. "Moab, Utah, United States".
    pub place_name: String,

    /// Layers this feature belongs to ("place", "poi", "address", ...).
    #[serde(default)]
    pub place_type: Vec<String>,

    /// `[longitude, latitude]`.
    pub center: [f64; 2],

    /// Match quality in `[0, 1]`.
    #[serde(default)]
    pub relevance: f64,

    /// Containing regions, innermost first.
    #[serde(default)]
    pub context: Vec<ContextEntry>,

    #[serde(default)]
    pub properties: FeatureProperties,

    /// House number for address features.
    #[serde(default)]
    pub address: Option<String>,
}

/// One containing-region breadcrumb.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub short_code: Option<String>,
}

/// Free-form feature properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    /// Comma-separated POI categories, e.g. "airport, airfield".
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "id": "place.123",
                "text": "Moab",
                "place_name": "Moab, Utah, United States",
                "place_type": ["place"],
                "center": [-109.5498, 38.5733],
                "relevance": 1
            }]
        }"#;
        let parsed: FeatureCollection = serde_json::from_str(json).unwrap();
        let f = &parsed.features[0];
        assert_eq!(f.text, "Moab");
        assert!(f.context.is_empty());
        assert!(f.properties.category.is_none());
        assert_eq!(f.relevance, 1.0);
    }

    #[test]
    fn missing_features_is_empty() {
        let parsed: FeatureCollection = serde_json::from_str(r#"{"type":"FeatureCollection"}"#).unwrap();
        assert!(parsed.features.is_empty());
    }
}
