//! In-memory airport lookup.

use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, LocationCandidate, LocationKind, RegionContext};
use crate::resolver::{AirportSource, state_code};

use super::error::DirectoryError;

/// Maximum number of airports returned per lookup.
const MAX_MATCHES: usize = 5;

/// One airport record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, e.g. "DFW"
    pub code: String,
    pub name: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Convert to a resolver candidate with the given relevance.
    pub fn to_candidate(&self, relevance: f64) -> LocationCandidate {
        let mut region = RegionContext::new("region", self.state.clone());
        if let Some(code) = state_code(&self.state) {
            region = region.with_short_code(format!("US-{code}"));
        }

        LocationCandidate::new(
            format!("{} ({}), {}, {}", self.name, self.code, self.city, self.state),
            self.name.clone(),
            LocationKind::Airport,
            Coordinate::new(self.latitude, self.longitude),
        )
        .with_context(vec![RegionContext::new("place", self.city.clone()), region])
        .with_relevance(relevance)
        .with_airport_code(self.code.clone())
    }
}

/// Thread-safe, cheaply cloneable airport directory.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: Arc<Vec<Airport>>,
}

impl AirportDirectory {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self {
            airports: Arc::new(airports),
        }
    }

    /// Parse a JSON array of airport records.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let airports: Vec<Airport> =
            serde_json::from_str(json).map_err(|e| DirectoryError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::new(airports))
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DirectoryError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Find airports whose code, name or city contains `query`.
    ///
    /// The three fields are matched independently (code matches first,
    /// then name, then city) and the combined list is deduplicated by
    /// airport code. Each match carries a relevance reflecting how it
    /// matched.
    pub fn search(&self, query: &str) -> Vec<(Airport, f64)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        // "lax airport" should still match on "lax".
        let needle = needle
            .strip_suffix(" airport")
            .map(str::trim)
            .unwrap_or(&needle)
            .to_string();

        let by_code = self.airports.iter().filter_map(|a| {
            let code = a.code.to_lowercase();
            if code == needle {
                Some((a, 1.0))
            } else if code.starts_with(&needle) {
                Some((a, 0.95))
            } else {
                None
            }
        });
        let by_name = self
            .airports
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .map(|a| (a, 0.85));
        let by_city = self
            .airports
            .iter()
            .filter(|a| a.city.to_lowercase().contains(&needle))
            .map(|a| (a, 0.8));

        let mut seen = HashSet::new();
        by_code
            .chain(by_name)
            .chain(by_city)
            .filter(|(a, _)| seen.insert(a.code.as_str()))
            .take(MAX_MATCHES)
            .map(|(a, relevance)| (a.clone(), relevance))
            .collect()
    }
}

impl AirportSource for AirportDirectory {
    type Error = Infallible;

    async fn search_airports(&self, query: &str) -> Result<Vec<LocationCandidate>, Infallible> {
        Ok(self
            .search(query)
            .iter()
            .map(|(a, relevance)| a.to_candidate(*relevance))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn airport(code: &str, name: &str, city: &str, state: &str) -> Airport {
        Airport {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn directory() -> AirportDirectory {
        AirportDirectory::new(vec![
            airport("DFW", "Dallas/Fort Worth International Airport", "Dallas", "TX"),
            airport("DAL", "Dallas Love Field", "Dallas", "TX"),
            airport("DEN", "Denver International Airport", "Denver", "CO"),
            airport("JAC", "Jackson Hole Airport", "Jackson", "WY"),
        ])
    }

    #[test]
    fn code_name_and_city_find_the_same_record_once() {
        let dir = directory();
        for query in ["DFW", "fort worth", "dfw airport"] {
            let hits = dir.search(query);
            assert_eq!(hits.len(), 1, "{query}");
            assert_eq!(hits[0].0.code, "DFW");
        }

        let dallas = dir.search("dallas");
        let codes: Vec<_> = dallas.iter().map(|(a, _)| a.code.as_str()).collect();
        assert_eq!(codes, vec!["DFW", "DAL"]);
    }

    #[test]
    fn exact_code_is_most_relevant() {
        let hits = directory().search("den");
        assert_eq!(hits[0].0.code, "DEN");
        assert_eq!(hits[0].1, 1.0);
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert!(directory().search("  ").is_empty());
    }

    #[test]
    fn candidate_shape() {
        let c = directory().search("JAC")[0].0.to_candidate(1.0);
        assert_eq!(c.kind, LocationKind::Airport);
        assert_eq!(c.label, "Jackson Hole Airport (JAC), Jackson, WY");
        assert_eq!(c.airport_code.as_deref(), Some("JAC"));
        assert_eq!(
            c.context_layer("region").and_then(|r| r.short_code.as_deref()),
            Some("US-WY")
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airports.json");
        std::fs::write(
            &path,
            r#"[{"code":"SLC","name":"Salt Lake City International Airport",
                 "city":"Salt Lake City","state":"UT","latitude":40.79,"longitude":-111.98}]"#,
        )
        .unwrap();

        let dir = AirportDirectory::load(&path).unwrap();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.search("salt lake")[0].0.code, "SLC");
    }

    #[test]
    fn load_errors() {
        assert!(matches!(
            AirportDirectory::load("/nonexistent/airports.json"),
            Err(DirectoryError::Io { .. })
        ));
        assert!(matches!(
            AirportDirectory::from_json("{not json"),
            Err(DirectoryError::Json { .. })
        ));
    }

    #[test]
    fn bundled_data_loads() {
        let dir = AirportDirectory::load("data/airports.json").unwrap();
        assert!(!dir.is_empty());
        assert_eq!(dir.search("LAS")[0].0.city, "Las Vegas");
    }

    #[tokio::test]
    async fn source_impl_returns_candidates() {
        let found = directory().search_airports("Denver").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].airport_code.as_deref(), Some("DEN"));
    }
}
