//! Display labels for location suggestions.

use crate::domain::{LocationCandidate, LocationKind};

/// US states plus DC, with their postal codes.
static US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Two-letter postal code for a state name or code.
///
/// Accepts "Nevada", "nevada", "NV" and the ISO form "US-NV".
pub fn state_code(region: &str) -> Option<&'static str> {
    let region = region.trim();
    let region = region
        .strip_prefix("US-")
        .or_else(|| region.strip_prefix("us-"))
        .unwrap_or(region);

    US_STATES
        .iter()
        .find(|(name, code)| {
            name.eq_ignore_ascii_case(region) || code.eq_ignore_ascii_case(region)
        })
        .map(|(_, code)| *code)
}

/// Label shown in the suggestion list.
///
/// Airports, POIs and addresses keep their full label. Places are
/// compressed to "City, ST".
pub fn display_label(candidate: &LocationCandidate) -> String {
    match candidate.kind {
        LocationKind::Airport | LocationKind::Poi | LocationKind::Address => {
            candidate.label.clone()
        }
        LocationKind::Place => city_state(candidate)
            .or_else(|| city_state_from_label(&candidate.label))
            .unwrap_or_else(|| candidate.label.clone()),
    }
}

/// "City, ST" from the region breadcrumbs, if they name a US state.
fn city_state(candidate: &LocationCandidate) -> Option<String> {
    let region = candidate.context_layer("region")?;
    let state = region
        .short_code
        .as_deref()
        .and_then(state_code)
        .or_else(|| state_code(&region.text))?;

    let city = candidate
        .context_layer("place")
        .or_else(|| candidate.context_layer("locality"))
        .map(|c| c.text.as_str())
        .unwrap_or(candidate.name.as_str());

    Some(format!("{city}, {state}"))
}

/// Fallback for candidates without structured regions:
/// "Moab, Utah 84532, United States" becomes "Moab, UT".
fn city_state_from_label(label: &str) -> Option<String> {
    let mut segments = label.split(',').map(str::trim).filter(|s| !s.is_empty());
    let city = segments.next()?;

    let state = segments.find_map(|seg| {
        let without_zip = seg.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-');
        state_code(without_zip.trim())
    })?;

    Some(format!("{city}, {state}"))
}
