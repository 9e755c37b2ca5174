//! Trip configuration in URL query parameters.
//!
//! `?parks=Zion%20National%20Park,Arches%20National%20Park&start=2026-06-03&end=2026-06-08&pace=relaxed&kid_friendly=true`

use reqwest::Url;
use serde::Deserialize;

use crate::domain::{Pace, TripDates};

use super::error::TripError;
use super::state::{Preferences, TripState};

/// Raw query parameters, as an HTTP framework hands them over.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripQueryParams {
    pub parks: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub pace: Option<String>,
    pub avoid_crowds: Option<String>,
    pub scenic_drives: Option<String>,
    pub kid_friendly: Option<String>,
}

/// The shareable part of a trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripQuery {
    pub parks: Vec<String>,
    pub dates: Option<TripDates>,
    pub pace: Pace,
    pub preferences: Preferences,
}

fn flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Both dates or neither; a lone start or end is an error.
pub fn parse_dates(start: Option<&str>, end: Option<&str>) -> Result<Option<TripDates>, TripError> {
    match (non_blank(start), non_blank(end)) {
        (Some(start), Some(end)) => Ok(Some(TripDates::parse(start, end)?)),
        (None, None) => Ok(None),
        _ => Err(TripError::IncompleteDates),
    }
}

impl TryFrom<TripQueryParams> for TripQuery {
    type Error = TripError;

    fn try_from(params: TripQueryParams) -> Result<Self, TripError> {
        let parks = params
            .parks
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let dates = parse_dates(params.start.as_deref(), params.end.as_deref())?;

        let pace = params.pace.as_deref().unwrap_or_default().parse()?;

        Ok(Self {
            parks,
            dates,
            pace,
            preferences: Preferences {
                avoid_crowds: flag(params.avoid_crowds.as_deref()),
                scenic_drives: flag(params.scenic_drives.as_deref()),
                kid_friendly: flag(params.kid_friendly.as_deref()),
            },
        })
    }
}

impl TripQuery {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Result<Self, TripError> {
        let mut params = TripQueryParams::default();
        let Ok(mut url) = Url::parse("http://localhost/") else {
            return params.try_into();
        };
        url.set_query(Some(query.trim_start_matches('?')));

        for (key, value) in url.query_pairs() {
            let value = Some(value.into_owned());
            match key.as_ref() {
                "parks" => params.parks = value,
                "start" => params.start = value,
                "end" => params.end = value,
                "pace" => params.pace = value,
                "avoid_crowds" => params.avoid_crowds = value,
                "scenic_drives" => params.scenic_drives = value,
                "kid_friendly" => params.kid_friendly = value,
                _ => {}
            }
        }
        params.try_into()
    }

    /// Encode as a query string (without the leading `?`).
    ///
    /// Only set values are emitted; flags appear only when true.
    pub fn to_query_string(&self) -> String {
        let Ok(mut url) = Url::parse("http://localhost/") else {
            return String::new();
        };
        {
            let mut pairs = url.query_pairs_mut();
            if !self.parks.is_empty() {
                pairs.append_pair("parks", &self.parks.join(","));
            }
            if let Some(dates) = &self.dates {
                pairs.append_pair("start", &dates.start().to_string());
                pairs.append_pair("end", &dates.end().to_string());
            }
            pairs.append_pair("pace", self.pace.as_str());
            for (on, key) in [
                (self.preferences.avoid_crowds, "avoid_crowds"),
                (self.preferences.scenic_drives, "scenic_drives"),
                (self.preferences.kid_friendly, "kid_friendly"),
            ] {
                if on {
                    pairs.append_pair(key, "true");
                }
            }
        }
        url.query().unwrap_or_default().to_string()
    }

    /// Build a trip from the query. Parks are added in order.
    pub fn to_state(&self) -> Result<TripState, TripError> {
        let mut state = TripState::new();
        state.set_pace(self.pace);
        state.set_preferences(self.preferences);
        if let Some(dates) = self.dates {
            state.set_dates(dates);
        }
        for park in &self.parks {
            state.add_park(park)?;
        }
        Ok(state)
    }

    /// The shareable part of `state`.
    pub fn from_state(state: &TripState) -> Self {
        Self {
            parks: state.parks().iter().map(|p| p.name.clone()).collect(),
            dates: state.dates().copied(),
            pace: state.pace(),
            preferences: state.preferences(),
        }
    }
}
