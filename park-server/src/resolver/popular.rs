//! Curated starting points shown before the user types anything.

use crate::domain::{Coordinate, LocationCandidate, LocationKind, RegionContext};

/// (city, state name, state code, lat, lon)
const POPULAR_CITIES: &[(&str, &str, &str, f64, f64)] = &[
    ("Las Vegas", "Nevada", "NV", 36.1699, -115.1398),
    ("Salt Lake City", "Utah", "UT", 40.7608, -111.8910),
    ("Denver", "Colorado", "CO", 39.7392, -104.9903),
    ("Phoenix", "Arizona", "AZ", 33.4484, -112.0740),
    ("Jackson", "Wyoming", "WY", 43.4799, -110.7624),
    ("Bozeman", "Montana", "MT", 45.6770, -111.0429),
    ("Seattle", "Washington", "WA", 47.6062, -122.3321),
    ("San Francisco", "California", "CA", 37.7749, -122.4194),
];

/// (code, name, city, state code, lat, lon)
const POPULAR_AIRPORTS: &[(&str, &str, &str, &str, f64, f64)] = &[
    ("LAS", "Harry Reid International Airport", "Las Vegas", "NV", 36.0840, -115.1537),
    ("SLC", "Salt Lake City International Airport", "Salt Lake City", "UT", 40.7899, -111.9791),
    ("DEN", "Denver International Airport", "Denver", "CO", 39.8561, -104.6737),
];

/// Popular cities followed by popular airports.
pub fn popular_locations() -> Vec<LocationCandidate> {
    let cities = POPULAR_CITIES.iter().map(|&(city, state, code, lat, lon)| {
        LocationCandidate::new(
            format!("{city}, {state}, United States"),
            city,
            LocationKind::Place,
            Coordinate::new(lat, lon),
        )
        .with_context(vec![
            RegionContext::new("region", state).with_short_code(format!("US-{code}")),
        ])
    });

    let airports = POPULAR_AIRPORTS.iter().map(|&(code, name, city, state, lat, lon)| {
        LocationCandidate::new(
            format!("{name} ({code}), {city}, {state}"),
            name,
            LocationKind::Airport,
            Coordinate::new(lat, lon),
        )
        .with_airport_code(code)
    });

    cities.chain(airports).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::display_label;

    #[test]
    fn cities_compress_to_city_state() {
        let popular = popular_locations();
        assert_eq!(display_label(&popular[0]), "Las Vegas, NV");
    }

    #[test]
    fn airports_carry_codes() {
        let popular = popular_locations();
        let codes: Vec<_> = popular
            .iter()
            .filter_map(|c| c.airport_code.as_deref())
            .collect();
        assert_eq!(codes, vec!["LAS", "SLC", "DEN"]);
    }
}
