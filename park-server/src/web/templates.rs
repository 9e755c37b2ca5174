//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Pace, park_catalog};
use crate::itinerary::Itinerary;

use super::dto::ParkOption;

/// Planner page: park picker, dates, pace and starting point.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub parks: Vec<ParkOption>,
    pub paces: Vec<PaceOption>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            parks: park_catalog().iter().map(ParkOption::from).collect(),
            paces: [Pace::Relaxed, Pace::Balanced, Pace::Packed]
                .into_iter()
                .map(PaceOption::from)
                .collect(),
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Itinerary page.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub itinerary: Itinerary,
    pub park_names: Vec<String>,
    /// Query string that reproduces this trip
    pub share_query: String,
}

impl ItineraryTemplate {
    pub fn title(&self) -> String {
        match self.park_names.len() {
            0 => "Your trip".to_string(),
            1 => self.park_names[0].clone(),
            n => format!("{} and {} more", self.park_names[0], n - 1),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

/// Pace choice in the planner form.
#[derive(Debug, Clone)]
pub struct PaceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub selected: bool,
}

impl From<Pace> for PaceOption {
    fn from(pace: Pace) -> Self {
        Self {
            value: pace.as_str(),
            label: pace.label(),
            hint: pace.activities_hint(),
            selected: pace == Pace::default(),
        }
    }
}
