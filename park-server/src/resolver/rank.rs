//! Merging, validation and ranking of location candidates.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{LocationCandidate, LocationKind};

use super::QueryClass;

/// Score boost for addresses when the query looks like an address.
const ADDRESS_BOOST: f64 = 0.1;

/// Score boost for airports when the query looks like an airport.
const AIRPORT_BOOST: f64 = 0.3;

/// Merge directory and geocoder results, directory first.
///
/// Repeats are dropped by [`LocationCandidate::dedup_key`]. A geocoder
/// hit named exactly like a directory airport is the same place, so the
/// directory entry wins.
pub fn merge(
    directory: Vec<LocationCandidate>,
    geocoded: Vec<LocationCandidate>,
) -> Vec<LocationCandidate> {
    let directory_names: HashSet<String> = directory
        .iter()
        .map(|c| c.name.trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    directory
        .into_iter()
        .chain(
            geocoded
                .into_iter()
                .filter(|c| !directory_names.contains(&c.name.trim().to_lowercase())),
        )
        .filter(|c| seen.insert(c.dedup_key()))
        .collect()
}

/// Whether a candidate is worth showing.
///
/// Labels under two characters or mostly digits are noise for places,
/// but addresses, POIs and airports are kept regardless.
pub fn is_valid(candidate: &LocationCandidate) -> bool {
    match candidate.kind {
        LocationKind::Address | LocationKind::Poi | LocationKind::Airport => true,
        LocationKind::Place => {
            let label = candidate.label.trim();
            label.chars().count() >= 2 && !mostly_numeric(label)
        }
    }
}

fn mostly_numeric(s: &str) -> bool {
    let (digits, total) = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(d, t), c| {
            (d + usize::from(c.is_ascii_digit()), t + 1)
        });
    total > 0 && digits * 2 > total
}

/// Priority bucket; lower sorts first.
pub fn priority(candidate: &LocationCandidate, class: QueryClass) -> u8 {
    use LocationKind::*;

    if class.looks_like_address {
        return match candidate.kind {
            Address => 0,
            Poi => 1,
            Place => 2,
            Airport => 3,
        };
    }

    if class.looks_like_airport {
        if candidate.is_airport_like() {
            return 0;
        }
        return match candidate.kind {
            Place => 1,
            Poi => 2,
            Address => 3,
            Airport => 0,
        };
    }

    match candidate.kind {
        Place => 0,
        Airport => 1,
        Address => 2,
        Poi => 3,
    }
}

/// Relevance plus the query-dependent boosts.
pub fn score(candidate: &LocationCandidate, class: QueryClass) -> f64 {
    let mut score = candidate.relevance;
    if class.looks_like_address && candidate.kind == LocationKind::Address {
        score += ADDRESS_BOOST;
    }
    if class.looks_like_airport && candidate.is_airport_like() {
        score += AIRPORT_BOOST;
    }
    score
}

/// Sort by priority bucket, then by descending score. Stable.
pub fn rank(mut candidates: Vec<LocationCandidate>, class: QueryClass) -> Vec<LocationCandidate> {
    candidates.sort_by(|a, b| {
        priority(a, class)
            .cmp(&priority(b, class))
            .then_with(|| {
                score(b, class)
                    .partial_cmp(&score(a, class))
                    .unwrap_or(Ordering::Equal)
            })
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::resolver::classify;

    fn candidate(name: &str, kind: LocationKind, relevance: f64) -> LocationCandidate {
        LocationCandidate::new(name, name, kind, Coordinate::new(0.0, 0.0))
            .with_relevance(relevance)
    }

    #[test]
    fn merge_prefers_directory() {
        let dir = vec![
            candidate("Denver International Airport", LocationKind::Airport, 0.9)
                .with_airport_code("DEN"),
        ];
        let geo = vec![
            candidate("denver international airport", LocationKind::Poi, 1.0),
            candidate("Denver", LocationKind::Place, 1.0),
        ];
        let merged = merge(dir, geo);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].airport_code.as_deref(), Some("DEN"));
        assert_eq!(merged[1].name, "Denver");
    }

    #[test]
    fn merge_keeps_same_named_cities_apart() {
        let city = |label: &str| {
            LocationCandidate::new(label, "Springfield", LocationKind::Place, Coordinate::new(0.0, 0.0))
        };
        let merged = merge(
            vec![],
            vec![
                city("Springfield, Illinois, United States"),
                city("Springfield, Missouri, United States"),
                city("springfield, illinois, united states"),
            ],
        );
        let labels: Vec<_> = merged.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Springfield, Illinois, United States",
                "Springfield, Missouri, United States"
            ]
        );
    }

    #[test]
    fn validation_drops_numeric_places_only() {
        assert!(!is_valid(&candidate("7", LocationKind::Place, 1.0)));
        assert!(!is_valid(&candidate("12345 US", LocationKind::Place, 1.0)));
        assert!(!is_valid(&candidate("", LocationKind::Place, 1.0)));
        assert!(is_valid(&candidate("7", LocationKind::Address, 1.0)));
        assert!(is_valid(&candidate("1", LocationKind::Poi, 1.0)));
        assert!(is_valid(&candidate("9", LocationKind::Airport, 1.0)));
        assert!(is_valid(&candidate("Ely", LocationKind::Place, 1.0)));
    }

    #[test]
    fn airport_query_ranks_airports_first() {
        let class = classify("DFW");
        let ranked = rank(
            vec![
                candidate("Dallas", LocationKind::Place, 0.8),
                candidate("Dallas/Fort Worth International Airport", LocationKind::Airport, 0.8),
            ],
            class,
        );
        assert_eq!(ranked[0].kind, LocationKind::Airport);
    }

    #[test]
    fn airport_like_poi_counts_as_airport() {
        let class = classify("Denver airport");
        let ranked = rank(
            vec![
                candidate("Denver", LocationKind::Place, 1.0),
                candidate("Rocky Mountain Metropolitan Airport", LocationKind::Poi, 0.5),
            ],
            class,
        );
        assert_eq!(ranked[0].name, "Rocky Mountain Metropolitan Airport");
    }

    #[test]
    fn address_query_ladder() {
        let class = classify("123 Main St");
        let ranked = rank(
            vec![
                candidate("Main Street Airport", LocationKind::Airport, 1.0),
                candidate("Mainville", LocationKind::Place, 1.0),
                candidate("123 Main St", LocationKind::Address, 0.5),
                candidate("Main St Diner", LocationKind::Poi, 1.0),
            ],
            class,
        );
        let kinds: Vec<_> = ranked.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LocationKind::Address,
                LocationKind::Poi,
                LocationKind::Place,
                LocationKind::Airport
            ]
        );
    }

    #[test]
    fn neutral_query_ladder() {
        let class = classify("Springdale");
        let ranked = rank(
            vec![
                candidate("Springdale Diner", LocationKind::Poi, 1.0),
                candidate("Springdale Rd", LocationKind::Address, 1.0),
                candidate("Springdale Municipal", LocationKind::Airport, 1.0),
                candidate("Springdale", LocationKind::Place, 0.2),
            ],
            class,
        );
        let kinds: Vec<_> = ranked.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LocationKind::Place,
                LocationKind::Airport,
                LocationKind::Address,
                LocationKind::Poi
            ]
        );
    }

    #[test]
    fn ties_break_on_score_then_input_order() {
        let class = classify("Springdale");
        let ranked = rank(
            vec![
                candidate("Springdale, AR", LocationKind::Place, 0.7),
                candidate("Springdale, UT", LocationKind::Place, 0.9),
                candidate("Springdale, OH", LocationKind::Place, 0.7),
            ],
            class,
        );
        let names: Vec<_> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Springdale, UT", "Springdale, AR", "Springdale, OH"]);
    }

    #[test]
    fn boosts() {
        let address = candidate("1 Main St", LocationKind::Address, 0.5);
        assert!((score(&address, classify("1 main")) - 0.6).abs() < 1e-9);

        let airport = candidate("Salt Lake City International Airport", LocationKind::Airport, 0.5);
        assert!((score(&airport, classify("SLC")) - 0.8).abs() < 1e-9);
        assert!((score(&airport, classify("Salt Lake")) - 0.5).abs() < 1e-9);
    }
}
