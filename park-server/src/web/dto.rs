//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::allocator::{DayAllocation, ParkDays};
use crate::domain::{ActivityCategory, Coordinate, ParkInfo};
use crate::resolver::Resolution;

/// Query for the location search endpoint.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(default)]
    pub q: String,

    /// Caller's request sequence number, echoed back so the client can
    /// drop stale responses
    pub seq: Option<u64>,
}

/// Location search response.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,

    #[serde(flatten)]
    pub resolution: Resolution,
}

/// Trip fields shared by the allocation and itinerary requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripRequest {
    pub parks: Vec<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub pace: Option<String>,
    #[serde(default)]
    pub avoid_crowds: bool,
    #[serde(default)]
    pub scenic_drives: bool,
    #[serde(default)]
    pub kid_friendly: bool,
}

/// Request for an initial allocation.
#[derive(Debug, Deserialize)]
pub struct AllocateRequest {
    #[serde(flatten)]
    pub trip: TripRequest,

    /// Activity count per park name
    #[serde(default)]
    pub activity_counts: std::collections::HashMap<String, u32>,
}

/// Request to set one park's days by hand.
#[derive(Debug, Deserialize)]
pub struct RebalanceRequest {
    pub allocation: DayAllocation,
    pub park: String,
    pub days: u32,

    /// Trip length; defaults to the current allocation's total
    pub total_days: Option<u32>,
}

/// Allocation result.
#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub total_days: u32,
    pub allocation: DayAllocation,
}

/// One activity in an itinerary request.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityInput {
    pub name: String,
    #[serde(default)]
    pub category: ActivityCategory,
    pub day: u32,
    pub park: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub permit_required: bool,
    #[serde(default)]
    pub shuttle_required: bool,
}

/// Request for a composed itinerary.
#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    #[serde(flatten)]
    pub trip: TripRequest,

    #[serde(default)]
    pub activities: Vec<ActivityInput>,

    /// Trails from the directory to add as hikes
    #[serde(default)]
    pub trails: Vec<TrailPick>,

    /// Manual day counts, applied in order after the activities
    #[serde(default)]
    pub park_days: Vec<ParkDays>,

    /// Show only activities on this day
    pub day: Option<u32>,

    /// Show only activities matching this text
    #[serde(default)]
    pub search: String,
}

/// A directory trail placed on a trip day.
#[derive(Debug, Clone, Deserialize)]
pub struct TrailPick {
    pub name: String,
    /// Disambiguates trails that share a name
    pub park_code: Option<String>,
    pub day: u32,
}

/// Query for the alerts endpoint.
#[derive(Debug, Deserialize)]
pub struct AlertsRequest {
    #[serde(rename = "parkCode", default)]
    pub park_code: String,
}

/// Query for the trails endpoint.
#[derive(Debug, Deserialize)]
pub struct TrailsRequest {
    #[serde(default)]
    pub parks: String,
    #[serde(default)]
    pub names: String,
}

/// Request for a driving route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub waypoints: Vec<Coordinate>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Split a comma-separated list, dropping blanks.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Catalog park shown in the planner form.
#[derive(Debug, Clone, Serialize)]
pub struct ParkOption {
    pub name: String,
    pub code: String,
    pub tier: String,
}

impl From<&ParkInfo> for ParkOption {
    fn from(park: &ParkInfo) -> Self {
        Self {
            name: park.name.to_string(),
            code: park.code.to_string(),
            tier: park.tier.to_string(),
        }
    }
}
