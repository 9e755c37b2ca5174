//! Conversion from geocoding features to resolver candidates.

use crate::domain::{Coordinate, LocationCandidate, LocationKind, RegionContext};

use super::types::Feature;

/// Category of a feature, from its first recognised place type.
///
/// POIs tagged with an airport category become airports so they rank
/// alongside directory airports.
fn kind_of(feature: &Feature) -> LocationKind {
    let is_airport = feature
        .properties
        .category
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains("airport"));

    for layer in &feature.place_type {
        match layer.as_str() {
            "address" => return LocationKind::Address,
            "poi" | "poi.landmark" if is_airport => return LocationKind::Airport,
            "poi" | "poi.landmark" => return LocationKind::Poi,
            "place" | "locality" | "neighborhood" | "district" | "region" | "postcode" => {
                return LocationKind::Place;
            }
            _ => {}
        }
    }
    LocationKind::Place
}

/// Convert one geocoding feature.
pub fn feature_to_candidate(feature: &Feature) -> LocationCandidate {
    let kind = kind_of(feature);
    let name = match (&feature.address, kind) {
        (Some(number), LocationKind::Address) => format!("{number} {}", feature.text),
        _ => feature.text.clone(),
    };
    let context = feature
        .context
        .iter()
        .map(|c| {
            let entry = RegionContext::new(c.id.clone(), c.text.clone());
            match &c.short_code {
                Some(code) => entry.with_short_code(code.clone()),
                None => entry,
            }
        })
        .collect();

    LocationCandidate::new(
        feature.place_name.clone(),
        name,
        kind,
        Coordinate::from_lon_lat(feature.center),
    )
    .with_context(context)
    .with_relevance(feature.relevance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoding::types::{ContextEntry, FeatureProperties};
    use crate::resolver::display_label;

    fn feature(text: &str, place_name: &str, place_type: &str) -> Feature {
        Feature {
            id: format!("{place_type}.1"),
            text: text.to_string(),
            place_name: place_name.to_string(),
            place_type: vec![place_type.to_string()],
            center: [-115.14, 36.17],
            relevance: 0.9,
            context: Vec::new(),
            properties: FeatureProperties::default(),
            address: None,
        }
    }

    #[test]
    fn place_with_region_breadcrumbs() {
        let mut f = feature("Las Vegas", "Las Vegas, Nevada, United States", "place");
        f.context = vec![
            ContextEntry {
                id: "region.1".into(),
                text: "Nevada".into(),
                short_code: Some("US-NV".into()),
            },
            ContextEntry {
                id: "country.2".into(),
                text: "United States".into(),
                short_code: Some("us".into()),
            },
        ];
        let c = feature_to_candidate(&f);
        assert_eq!(c.kind, LocationKind::Place);
        assert_eq!(c.coordinate, Coordinate::new(36.17, -115.14));
        assert_eq!(display_label(&c), "Las Vegas, NV");
    }

    #[test]
    fn airport_poi_becomes_airport() {
        let mut f = feature(
            "Harry Reid International Airport",
            "Harry Reid International Airport, Las Vegas, Nevada 89119, United States",
            "poi",
        );
        f.properties.category = Some("airport, airfield".into());
        assert_eq!(feature_to_candidate(&f).kind, LocationKind::Airport);
    }

    #[test]
    fn plain_poi() {
        let mut f = feature("Visitor Center", "Visitor Center, Springdale, Utah", "poi");
        f.properties.category = Some("information".into());
        assert_eq!(feature_to_candidate(&f).kind, LocationKind::Poi);
    }

    #[test]
    fn address_includes_house_number() {
        let mut f = feature(
            "Zion Park Boulevard",
            "1 Zion Park Boulevard, Springdale, Utah 84767, United States",
            "address",
        );
        f.address = Some("1".into());
        let c = feature_to_candidate(&f);
        assert_eq!(c.kind, LocationKind::Address);
        assert_eq!(c.name, "1 Zion Park Boulevard");
    }
}
