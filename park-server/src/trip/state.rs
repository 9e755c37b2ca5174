//! The trip state object.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::{DayAllocation, allocate_days, rebalance};
use crate::domain::{
    Activity, ActivityCategory, ActivityId, DomainError, Pace, TripDates, TripPark, trip_length,
};

use super::error::TripError;

/// Optional trip preferences. They are carried through the URL and shown
/// on the itinerary but do not affect the allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub avoid_crowds: bool,
    #[serde(default)]
    pub scenic_drives: bool,
    #[serde(default)]
    pub kid_friendly: bool,
}

impl Preferences {
    /// Labels of the preferences that are switched on.
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.avoid_crowds, "Avoid crowds"),
            (self.scenic_drives, "Scenic drives"),
            (self.kid_friendly, "Kid friendly"),
        ]
        .into_iter()
        .filter_map(|(on, label)| on.then_some(label))
        .collect()
    }
}

/// A trip being planned.
///
/// Parks are unique by name (case-insensitive) and always carry the day
/// counts of the current allocation. Until the user sets a park's days by
/// hand, any change to parks, dates, pace or activities recomputes the
/// allocation from scratch. After a manual change, adding activities no
/// longer does; changing parks, dates or pace still does and clears the
/// manual flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripState {
    parks: Vec<TripPark>,
    dates: Option<TripDates>,
    pace: Pace,
    preferences: Preferences,
    activities: Vec<Activity>,
    allocation: DayAllocation,
    next_activity_id: u32,
    manually_adjusted: bool,
}

impl TripState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parks(&self) -> &[TripPark] {
        &self.parks
    }

    pub fn dates(&self) -> Option<&TripDates> {
        self.dates.as_ref()
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn allocation(&self) -> &DayAllocation {
        &self.allocation
    }

    pub fn is_manually_adjusted(&self) -> bool {
        self.manually_adjusted
    }

    /// Trip length in days, defaulting when no dates are set.
    pub fn total_days(&self) -> u32 {
        trip_length(self.dates.as_ref())
    }

    fn park_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.parks.iter().position(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Number of activities tied to each trip park.
    pub fn activity_counts(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for activity in &self.activities {
            let Some(idx) = activity.park.as_deref().and_then(|p| self.park_index(p)) else {
                continue;
            };
            *counts.entry(self.parks[idx].name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Apply `allocation` to the parks' day counts.
    fn apply(&mut self, allocation: DayAllocation) {
        for park in &mut self.parks {
            if let Some(days) = allocation.get(&park.name) {
                park.days = days;
            }
        }
        self.allocation = allocation;
    }

    fn reallocate(&mut self) {
        let allocation = allocate_days(
            &self.parks,
            self.total_days(),
            &self.activity_counts(),
            self.pace,
        );
        debug!(
            parks = self.parks.len(),
            total = allocation.total(),
            "reallocated trip days"
        );
        self.manually_adjusted = false;
        self.apply(allocation);
    }

    pub fn add_park(&mut self, name: &str) -> Result<(), TripError> {
        let park = TripPark::new(name, self.parks.len())?;
        if self.park_index(&park.name).is_some() {
            return Err(TripError::DuplicatePark(park.name));
        }
        self.parks.push(park);
        self.reallocate();
        Ok(())
    }

    /// Remove a park. Its activities stay on their days.
    pub fn remove_park(&mut self, name: &str) -> Result<(), TripError> {
        let idx = self
            .park_index(name)
            .ok_or_else(|| TripError::UnknownPark(name.trim().to_string()))?;
        self.parks.remove(idx);
        for (position, park) in self.parks.iter_mut().enumerate() {
            park.position = position;
        }
        self.reallocate();
        Ok(())
    }

    pub fn set_dates(&mut self, dates: TripDates) {
        self.dates = Some(dates);
        self.reallocate();
    }

    pub fn clear_dates(&mut self) {
        self.dates = None;
        self.reallocate();
    }

    pub fn set_pace(&mut self, pace: Pace) {
        self.pace = pace;
        self.reallocate();
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Set one park's day count by hand; the other parks absorb the
    /// difference.
    pub fn set_park_days(&mut self, name: &str, days: u32) -> Result<(), TripError> {
        let idx = self
            .park_index(name)
            .ok_or_else(|| TripError::UnknownPark(name.trim().to_string()))?;
        let park = self.parks[idx].name.clone();
        let allocation = rebalance(&self.allocation, &park, days, self.total_days())?;
        self.manually_adjusted = true;
        self.apply(allocation);
        Ok(())
    }

    /// Add an activity and return its id.
    ///
    /// `park`, when given, must be one of the trip's parks and is stored
    /// under the trip's spelling of the name.
    pub fn add_activity(
        &mut self,
        name: &str,
        category: ActivityCategory,
        day: u32,
        park: Option<&str>,
    ) -> Result<ActivityId, TripError> {
        let mut activity = Activity::new(ActivityId(0), name.trim(), category, day)?;
        activity.park = park.map(str::to_string);
        self.insert_activity(activity)
    }

    /// Add a fully built activity (from the trail directory, say),
    /// replacing its id with the next free one.
    pub fn insert_activity(&mut self, mut activity: Activity) -> Result<ActivityId, TripError> {
        if activity.day == 0 {
            return Err(DomainError::ZeroDay.into());
        }
        if let Some(park) = activity.park.take() {
            let idx = self
                .park_index(&park)
                .ok_or_else(|| TripError::UnknownPark(park.trim().to_string()))?;
            activity.park = Some(self.parks[idx].name.clone());
        }

        self.next_activity_id += 1;
        activity.id = ActivityId(self.next_activity_id);
        let id = activity.id;
        let counted = activity.park.is_some();
        self.activities.push(activity);
        if counted && !self.manually_adjusted {
            self.reallocate();
        }
        Ok(id)
    }

    pub fn remove_activity(&mut self, id: ActivityId) -> Result<Activity, TripError> {
        let idx = self
            .activities
            .iter()
            .position(|a| a.id == id)
            .ok_or(TripError::UnknownActivity(id))?;
        let activity = self.activities.remove(idx);
        if activity.park.is_some() && !self.manually_adjusted {
            self.reallocate();
        }
        Ok(activity)
    }

    /// Move an activity to another day. The day is not checked against
    /// the trip length.
    pub fn move_activity(&mut self, id: ActivityId, day: u32) -> Result<(), TripError> {
        if day == 0 {
            return Err(DomainError::ZeroDay.into());
        }
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(TripError::UnknownActivity(id))?;
        activity.day = day;
        Ok(())
    }
}
