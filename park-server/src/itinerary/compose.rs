//! Building the itinerary from a trip.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Activity, DEFAULT_TRIP_DAYS, TripDates};
use crate::nps::Alert;
use crate::trip::TripState;

use super::filter::{filter_activities, group_by_day};

/// "Jun 3 - Jun 8, 2026" for a date range, "3 days" without one.
pub fn format_date_range(dates: Option<&TripDates>) -> String {
    match dates {
        Some(dates) => dates.display_range(),
        None => format!("{DEFAULT_TRIP_DAYS} days"),
    }
}

/// One day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub index: u32,
    /// Calendar date, when the trip has dates
    pub date: Option<NaiveDate>,
    /// Park the day is spent in
    pub park: Option<String>,
    pub activities: Vec<Activity>,
}

impl ItineraryDay {
    /// "Day 2 - Thu, Jun 4", or "Day 2" without dates.
    pub fn heading(&self) -> String {
        match self.date {
            Some(date) => format!("Day {} - {}", self.index, date.format("%a, %b %-d")),
            None => format!("Day {}", self.index),
        }
    }
}

/// Alerts for one park of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkAlerts {
    pub park: String,
    pub park_code: Option<String>,
    pub alerts: Vec<Alert>,
}

/// The full day-by-day view of a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub date_range: String,
    pub total_days: u32,
    pub pace_label: &'static str,
    pub pace_hint: &'static str,
    pub preferences: Vec<&'static str>,
    pub days: Vec<ItineraryDay>,
    /// Day the activities were narrowed to, if any
    pub day_filter: Option<u32>,
    /// Text the activities were narrowed to; empty shows all
    pub search: String,
    /// Activities whose day falls outside the trip
    pub unscheduled: Vec<Activity>,
    pub alerts: Vec<ParkAlerts>,
}

impl Itinerary {
    /// Compose the itinerary of `trip`.
    ///
    /// `alerts` is keyed by lowercase park code. A park with no entry
    /// (because its fetch failed, say) shows no alerts.
    pub fn compose(trip: &TripState, alerts: &HashMap<String, Vec<Alert>>) -> Self {
        Self::compose_filtered(trip, alerts, None, "")
    }

    /// Like [`compose`](Self::compose), showing only the activities on
    /// `day_filter` (every day when `None`) that match `search`.
    pub fn compose_filtered(
        trip: &TripState,
        alerts: &HashMap<String, Vec<Alert>>,
        day_filter: Option<u32>,
        search: &str,
    ) -> Self {
        let total_days = trip.total_days();

        // Parks occupy consecutive blocks of days in trip order.
        let mut park_of_day = trip
            .parks()
            .iter()
            .flat_map(|p| std::iter::repeat_n(p.name.clone(), p.days as usize));

        let mut days: Vec<ItineraryDay> = (1..=total_days)
            .map(|index| ItineraryDay {
                index,
                date: trip.dates().and_then(|d| d.date_of_day(index)),
                park: park_of_day.next(),
                activities: Vec::new(),
            })
            .collect();

        let visible = filter_activities(trip.activities(), day_filter, search);
        let mut unscheduled = Vec::new();
        for (index, activities) in group_by_day(visible) {
            let activities = activities.into_iter().cloned();
            match index.checked_sub(1).and_then(|i| days.get_mut(i as usize)) {
                Some(day) => day.activities.extend(activities),
                None => unscheduled.extend(activities),
            }
        }

        let alerts = trip
            .parks()
            .iter()
            .map(|p| {
                let park_code = p.code().map(str::to_string);
                let park_alerts = park_code
                    .as_ref()
                    .and_then(|code| alerts.get(code))
                    .cloned()
                    .unwrap_or_default();
                ParkAlerts {
                    park: p.name.clone(),
                    park_code,
                    alerts: park_alerts,
                }
            })
            .collect();

        Self {
            date_range: format_date_range(trip.dates()),
            total_days,
            pace_label: trip.pace().label(),
            pace_hint: trip.pace().activities_hint(),
            preferences: trip.preferences().labels(),
            days,
            day_filter,
            search: search.trim().to_string(),
            unscheduled,
            alerts,
        }
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.iter().map(|p| p.alerts.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActivityCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alert(code: &str) -> Alert {
        Alert {
            title: "Road construction".into(),
            description: "Expect delays".into(),
            category: "Caution".into(),
            url: None,
            park_code: code.into(),
        }
    }

    fn trip() -> TripState {
        let mut trip = TripState::new();
        trip.add_park("Yellowstone National Park").unwrap();
        trip.add_park("Grand Teton National Park").unwrap();
        trip.set_dates(TripDates::new(date(2026, 6, 3), date(2026, 6, 8)).unwrap());
        trip
    }

    #[test]
    fn parks_fill_consecutive_days() {
        let itinerary = Itinerary::compose(&trip(), &HashMap::new());
        let parks: Vec<_> = itinerary.days.iter().map(|d| d.park.as_deref()).collect();
        assert_eq!(
            parks,
            vec![
                Some("Yellowstone National Park"),
                Some("Yellowstone National Park"),
                Some("Yellowstone National Park"),
                Some("Grand Teton National Park"),
                Some("Grand Teton National Park"),
                Some("Grand Teton National Park"),
            ]
        );
        assert_eq!(itinerary.days[0].date, Some(date(2026, 6, 3)));
        assert_eq!(itinerary.days[5].heading(), "Day 6 - Mon, Jun 8");
        assert_eq!(itinerary.date_range, "Jun 3 - Jun 8, 2026");
        assert_eq!(itinerary.pace_label, "Balanced pace");
    }

    #[test]
    fn activities_on_their_days_and_out_of_range_unscheduled() {
        let mut trip = trip();
        trip.add_activity("Old Faithful", ActivityCategory::Viewpoint, 2, None)
            .unwrap();
        trip.add_activity("Hidden Falls", ActivityCategory::Hike, 9, None)
            .unwrap();

        let itinerary = Itinerary::compose(&trip, &HashMap::new());
        assert_eq!(itinerary.days[1].activities.len(), 1);
        assert_eq!(itinerary.unscheduled.len(), 1);
        assert_eq!(itinerary.unscheduled[0].name, "Hidden Falls");
    }

    #[test]
    fn filtered_view() {
        let mut trip = trip();
        trip.add_activity("Old Faithful", ActivityCategory::Viewpoint, 2, None)
            .unwrap();
        trip.add_activity("Fairy Falls", ActivityCategory::Hike, 2, None)
            .unwrap();
        trip.add_activity("Taggart Lake", ActivityCategory::Hike, 5, None)
            .unwrap();

        let hikes = Itinerary::compose_filtered(&trip, &HashMap::new(), None, "hike");
        assert_eq!(hikes.days.len(), 6);
        assert_eq!(hikes.days[1].activities[0].name, "Fairy Falls");
        assert_eq!(hikes.days[1].activities.len(), 1);
        assert_eq!(hikes.days[4].activities[0].name, "Taggart Lake");
        assert_eq!(hikes.search, "hike");

        let day_two = Itinerary::compose_filtered(&trip, &HashMap::new(), Some(2), "");
        let planned: usize = day_two.days.iter().map(|d| d.activities.len()).sum();
        assert_eq!(planned, 2);
        assert_eq!(day_two.day_filter, Some(2));
    }

    #[test]
    fn missing_alerts_render_as_none() {
        let mut alerts = HashMap::new();
        alerts.insert("yell".to_string(), vec![alert("yell"), alert("yell")]);

        let itinerary = Itinerary::compose(&trip(), &alerts);
        assert_eq!(itinerary.alerts[0].alerts.len(), 2);
        assert_eq!(itinerary.alerts[1].park_code.as_deref(), Some("grte"));
        assert!(itinerary.alerts[1].alerts.is_empty());
        assert_eq!(itinerary.alert_count(), 2);
    }

    #[test]
    fn undated_trip() {
        let mut trip = TripState::new();
        trip.add_park("Zion National Park").unwrap();
        let itinerary = Itinerary::compose(&trip, &HashMap::new());
        assert_eq!(itinerary.days.len(), 3);
        assert_eq!(itinerary.days[0].heading(), "Day 1");
        assert_eq!(itinerary.date_range, "3 days");
    }

    #[test]
    fn date_range_formats() {
        let same_year = TripDates::new(date(2026, 6, 3), date(2026, 6, 8)).unwrap();
        assert_eq!(format_date_range(Some(&same_year)), "Jun 3 - Jun 8, 2026");

        let cross_year = TripDates::new(date(2026, 12, 30), date(2027, 1, 2)).unwrap();
        assert_eq!(
            format_date_range(Some(&cross_year)),
            "Dec 30, 2026 - Jan 2, 2027"
        );
        assert_eq!(format_date_range(None), "3 days");
    }
}
