//! Place and airport resolution for the starting-point picker.
//!
//! Turns free text into a ranked list of suggestions by asking two
//! sources at once: the airport directory (only when the query looks
//! like an airport search) and the geocoder (always). Results are
//! merged directory-first, filtered for noise, ranked by a ladder that
//! depends on what the query looks like, and given display labels.
//!
//! A failing source contributes nothing; the other source's results are
//! still returned. There are no retries.

mod classify;
mod format;
mod popular;
mod rank;

use std::future::Future;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::LocationCandidate;

pub use classify::{QueryClass, classify};
pub use format::{display_label, state_code};
pub use popular::popular_locations;
pub use rank::{is_valid, merge, priority, rank, score};

/// Which result types the geocoder should favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    AddressFirst,
    PlaceFirst,
}

impl TypeFilter {
    /// Value for the geocoder's `types` parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            TypeFilter::AddressFirst => "address,poi,place,locality",
            TypeFilter::PlaceFirst => "place,locality,poi,address",
        }
    }

    pub fn for_class(class: QueryClass) -> Self {
        if class.looks_like_address {
            TypeFilter::AddressFirst
        } else {
            TypeFilter::PlaceFirst
        }
    }
}

/// A structured airport lookup.
pub trait AirportSource: Send + Sync {
    type Error: std::fmt::Display + Send;

    fn search_airports(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationCandidate>, Self::Error>> + Send;
}

/// A general-purpose geocoder.
pub trait PlaceSource: Send + Sync {
    type Error: std::fmt::Display + Send;

    fn search_places(
        &self,
        query: &str,
        filter: TypeFilter,
    ) -> impl Future<Output = Result<Vec<LocationCandidate>, Self::Error>> + Send;
}

/// Resolver tuning.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum number of suggestions returned.
    pub max_results: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { max_results: 8 }
    }
}

/// One entry of the suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub candidate: LocationCandidate,
}

impl Suggestion {
    pub fn new(candidate: LocationCandidate) -> Self {
        Self {
            label: display_label(&candidate),
            candidate,
        }
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "suggestions", rename_all = "lowercase")]
pub enum Resolution {
    /// Blank query: curated starting points
    Popular(Vec<Suggestion>),
    /// Ranked matches for the query
    Matches(Vec<Suggestion>),
}

impl Resolution {
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            Resolution::Popular(s) | Resolution::Matches(s) => s,
        }
    }
}

/// Two-source location resolver.
pub struct Resolver<A, P> {
    airports: A,
    places: P,
    config: ResolverConfig,
}

impl<A: AirportSource, P: PlaceSource> Resolver<A, P> {
    pub fn new(airports: A, places: P, config: ResolverConfig) -> Self {
        Self {
            airports,
            places,
            config,
        }
    }

    pub fn airports(&self) -> &A {
        &self.airports
    }

    pub fn places(&self) -> &P {
        &self.places
    }

    /// Resolve a free-text query into suggestions.
    pub async fn resolve(&self, query: &str) -> Resolution {
        let query = query.trim();
        if query.is_empty() {
            return Resolution::Popular(
                popular_locations().into_iter().map(Suggestion::new).collect(),
            );
        }

        let class = classify(query);
        let filter = TypeFilter::for_class(class);

        let airport_lookup = async {
            if !class.looks_like_airport {
                return Vec::new();
            }
            self.airports
                .search_airports(query)
                .await
                .unwrap_or_else(|e| {
                    warn!(query, error = %e, "airport directory lookup failed");
                    Vec::new()
                })
        };

        let place_lookup = async {
            self.places
                .search_places(query, filter)
                .await
                .unwrap_or_else(|e| {
                    warn!(query, error = %e, "geocoding lookup failed");
                    Vec::new()
                })
        };

        let (airports, places) = tokio::join!(airport_lookup, place_lookup);
        debug!(
            query,
            airports = airports.len(),
            places = places.len(),
            "resolver sources returned"
        );

        let candidates: Vec<_> = merge(airports, places).into_iter().filter(is_valid).collect();

        let suggestions = rank(candidates, class)
            .into_iter()
            .take(self.config.max_results)
            .map(Suggestion::new)
            .collect();

        Resolution::Matches(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, LocationKind, RegionContext};
    use std::sync::Mutex;

    #[derive(Debug, thiserror::Error)]
    #[error("source unavailable")]
    struct Unavailable;

    /// Mock source returning canned results, or failing.
    struct MockSource {
        results: Option<Vec<LocationCandidate>>,
        calls: Mutex<Vec<String>>,
        filters: Mutex<Vec<TypeFilter>>,
    }

    impl MockSource {
        fn ok(results: Vec<LocationCandidate>) -> Self {
            Self {
                results: Some(results),
                calls: Mutex::new(Vec::new()),
                filters: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                results: None,
                calls: Mutex::new(Vec::new()),
                filters: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn respond(&self, query: &str) -> Result<Vec<LocationCandidate>, Unavailable> {
            self.calls.lock().unwrap().push(query.to_string());
            self.results.clone().ok_or(Unavailable)
        }
    }

    impl AirportSource for MockSource {
        type Error = Unavailable;

        async fn search_airports(&self, query: &str) -> Result<Vec<LocationCandidate>, Unavailable> {
            self.respond(query)
        }
    }

    impl PlaceSource for MockSource {
        type Error = Unavailable;

        async fn search_places(
            &self,
            query: &str,
            filter: TypeFilter,
        ) -> Result<Vec<LocationCandidate>, Unavailable> {
            self.filters.lock().unwrap().push(filter);
            self.respond(query)
        }
    }

    fn coord() -> Coordinate {
        Coordinate::new(32.9, -97.0)
    }

    fn dfw_airport() -> LocationCandidate {
        LocationCandidate::new(
            "Dallas/Fort Worth International Airport (DFW), Dallas, TX",
            "Dallas/Fort Worth International Airport",
            LocationKind::Airport,
            coord(),
        )
        .with_airport_code("DFW")
        .with_relevance(0.9)
    }

    fn dallas_place() -> LocationCandidate {
        LocationCandidate::new("Dallas, Texas, United States", "Dallas", LocationKind::Place, coord())
            .with_context(vec![
                RegionContext::new("region.1", "Texas").with_short_code("US-TX"),
            ])
            .with_relevance(0.9)
    }

    fn resolver(airports: MockSource, places: MockSource) -> Resolver<MockSource, MockSource> {
        Resolver::new(airports, places, ResolverConfig::default())
    }

    #[tokio::test]
    async fn blank_query_returns_popular() {
        let r = resolver(MockSource::ok(vec![]), MockSource::ok(vec![]));
        let res = r.resolve("   ").await;
        assert!(matches!(res, Resolution::Popular(_)));
        assert!(!res.suggestions().is_empty());
        assert_eq!(r.airports().call_count(), 0);
        assert_eq!(r.places().call_count(), 0);
    }

    #[tokio::test]
    async fn airport_code_outranks_city() {
        let r = resolver(
            MockSource::ok(vec![dfw_airport()]),
            MockSource::ok(vec![dallas_place()]),
        );
        let res = r.resolve("DFW").await;
        let labels: Vec<_> = res.suggestions().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Dallas/Fort Worth International Airport (DFW), Dallas, TX",
                "Dallas, TX"
            ]
        );
    }

    #[tokio::test]
    async fn directory_skipped_for_non_airport_queries() {
        let r = resolver(MockSource::ok(vec![dfw_airport()]), MockSource::ok(vec![dallas_place()]));
        let res = r.resolve("Dallas").await;
        assert_eq!(r.airports().call_count(), 0);
        assert_eq!(res.suggestions().len(), 1);
        assert_eq!(res.suggestions()[0].label, "Dallas, TX");
    }

    #[tokio::test]
    async fn address_queries_use_address_filter() {
        let r = resolver(MockSource::ok(vec![]), MockSource::ok(vec![]));
        r.resolve("100 Zion Park Blvd").await;
        assert_eq!(
            *r.places().filters.lock().unwrap(),
            vec![TypeFilter::AddressFirst]
        );
    }

    #[tokio::test]
    async fn failing_geocoder_degrades_to_directory_results() {
        let r = resolver(MockSource::ok(vec![dfw_airport()]), MockSource::failing());
        let res = r.resolve("DFW").await;
        assert_eq!(res.suggestions().len(), 1);
        assert_eq!(res.suggestions()[0].candidate.airport_code.as_deref(), Some("DFW"));
    }

    #[tokio::test]
    async fn both_sources_failing_gives_empty_matches() {
        let r = resolver(MockSource::failing(), MockSource::failing());
        let res = r.resolve("SLC").await;
        assert_eq!(res, Resolution::Matches(vec![]));
    }

    #[tokio::test]
    async fn numeric_noise_is_filtered() {
        let noise = LocationCandidate::new("7", "7", LocationKind::Place, coord());
        let r = resolver(MockSource::ok(vec![]), MockSource::ok(vec![noise, dallas_place()]));
        let res = r.resolve("Dallas").await;
        assert_eq!(res.suggestions().len(), 1);
    }

    #[tokio::test]
    async fn results_are_capped() {
        let many: Vec<_> = (0..20)
            .map(|i| {
                LocationCandidate::new(
                    format!("Springfield {i}"),
                    format!("Springfield {i}"),
                    LocationKind::Place,
                    coord(),
                )
            })
            .collect();
        let r = resolver(MockSource::ok(vec![]), MockSource::ok(many));
        let res = r.resolve("Springfield").await;
        assert_eq!(res.suggestions().len(), ResolverConfig::default().max_results);
    }

    #[test]
    fn type_filter_params() {
        assert_eq!(
            TypeFilter::for_class(classify("12 Main St")),
            TypeFilter::AddressFirst
        );
        assert_eq!(TypeFilter::for_class(classify("Moab")), TypeFilter::PlaceFirst);
        assert!(TypeFilter::PlaceFirst.as_param().starts_with("place"));
    }
}
