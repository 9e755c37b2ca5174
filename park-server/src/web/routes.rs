//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::allocator::{AllocationError, allocate_days, effective_total, rebalance};
use crate::domain::{Activity, ActivityId, DomainError, TripPark, trip_length};
use crate::itinerary::Itinerary;
use crate::nps::{Alert, Entrance, NpsError, entrance_with_fallback};
use crate::resolver::{Suggestion, popular_locations};
use crate::routing::{RouteSummary, RoutingError};
use crate::trails::{Trail, TrailDirectory};
use crate::trip::{Preferences, TripError, TripQuery, TripQueryParams, TripState, parse_dates};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/itinerary", get(itinerary_page))
        .route("/api/locations/search", get(search_locations))
        .route("/api/locations/popular", get(popular))
        .route("/api/trip/allocate", post(allocate))
        .route("/api/trip/rebalance", post(rebalance_days))
        .route("/api/itinerary", post(compose_itinerary))
        .route("/api/alerts", get(park_alerts))
        .route("/api/parks/:code/entrance", get(park_entrance))
        .route("/api/trails", get(trails))
        .route("/api/route", post(route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Planner page.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::new()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Build the trip query from JSON trip fields.
fn trip_query(req: &TripRequest) -> Result<TripQuery, TripError> {
    Ok(TripQuery {
        parks: req.parks.clone(),
        dates: parse_dates(req.start.as_deref(), req.end.as_deref())?,
        pace: req.pace.as_deref().unwrap_or_default().parse()?,
        preferences: Preferences {
            avoid_crowds: req.avoid_crowds,
            scenic_drives: req.scenic_drives,
            kid_friendly: req.kid_friendly,
        },
    })
}

/// NPS codes of the trip's catalog parks.
fn park_codes(trip: &TripState) -> Vec<String> {
    trip.parks()
        .iter()
        .filter_map(|p| p.code())
        .map(str::to_string)
        .collect()
}

/// Itinerary page for a trip given in the query string.
async fn itinerary_page(
    State(state): State<AppState>,
    Query(params): Query<TripQueryParams>,
) -> Result<Response, AppError> {
    let trip = match TripQuery::try_from(params).and_then(|q| q.to_state()) {
        Ok(trip) => trip,
        Err(e) => {
            warn!(error = %e, "invalid itinerary query");
            let page = ErrorTemplate {
                title: "Invalid trip".to_string(),
                message: e.to_string(),
            };
            let html = page.render().map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
            return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
        }
    };

    let alerts = state.alerts_by_park(&park_codes(&trip)).await;
    let template = ItineraryTemplate {
        itinerary: Itinerary::compose(&trip, &alerts),
        park_names: trip.parks().iter().map(|p| p.name.clone()).collect(),
        share_query: TripQuery::from_state(&trip).to_query_string(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

/// Starting-point suggestions for a free-text query.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let resolution = state.resolver.resolve(&req.q).await;
    Json(LocationSearchResponse {
        seq: req.seq,
        resolution,
    })
}

/// Curated starting points.
async fn popular() -> Json<Vec<Suggestion>> {
    Json(popular_locations().into_iter().map(Suggestion::new).collect())
}

/// Initial day allocation.
async fn allocate(Json(req): Json<AllocateRequest>) -> Result<Json<AllocationResponse>, AppError> {
    let query = trip_query(&req.trip)?;
    let parks = query
        .parks
        .iter()
        .enumerate()
        .map(|(i, name)| TripPark::new(name, i))
        .collect::<Result<Vec<_>, _>>()?;

    let total_days = trip_length(query.dates.as_ref());
    let allocation = allocate_days(&parks, total_days, &req.activity_counts, query.pace);
    Ok(Json(AllocationResponse {
        total_days,
        allocation,
    }))
}

/// Set one park's days by hand.
async fn rebalance_days(
    Json(req): Json<RebalanceRequest>,
) -> Result<Json<AllocationResponse>, AppError> {
    let total_days = effective_total(req.total_days.unwrap_or_else(|| req.allocation.total()));
    let allocation = rebalance(&req.allocation, &req.park, req.days, total_days)?;
    Ok(Json(AllocationResponse {
        total_days,
        allocation,
    }))
}

/// Build the trip described by an itinerary request.
fn build_trip(req: &ItineraryRequest, trails: &TrailDirectory) -> Result<TripState, AppError> {
    let mut trip = trip_query(&req.trip)?.to_state()?;
    for input in &req.activities {
        let mut activity = Activity::new(ActivityId(0), input.name.trim(), input.category, input.day)?;
        if let Some(link) = input.link.as_deref().filter(|l| !l.trim().is_empty()) {
            activity = activity.with_link(link)?;
        }
        activity.park = input.park.clone();
        activity.permit_required = input.permit_required;
        activity.shuttle_required = input.shuttle_required;
        trip.insert_activity(activity)?;
    }
    for pick in &req.trails {
        let trail = trails
            .by_name(&pick.name, pick.park_code.as_deref())
            .ok_or_else(|| AppError::BadRequest {
                message: format!("Unknown trail: {}", pick.name),
            })?;
        trip.insert_activity(trail.to_activity(ActivityId(0), pick.day)?)?;
    }
    for park_days in &req.park_days {
        trip.set_park_days(&park_days.park, park_days.days)?;
    }
    Ok(trip)
}

/// Composed itinerary as JSON, optionally narrowed by day and text.
async fn compose_itinerary(
    State(state): State<AppState>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<Itinerary>, AppError> {
    let trip = build_trip(&req, &state.trails)?;
    let alerts = state.alerts_by_park(&park_codes(&trip)).await;
    Ok(Json(Itinerary::compose_filtered(
        &trip,
        &alerts,
        req.day,
        &req.search,
    )))
}

/// Alerts for the requested parks, in request order.
async fn park_alerts(
    State(state): State<AppState>,
    Query(req): Query<AlertsRequest>,
) -> Json<Vec<Alert>> {
    let codes: Vec<String> = split_list(&req.park_code)
        .into_iter()
        .map(|c| c.to_lowercase())
        .collect();
    let mut by_park = state.alerts_by_park(&codes).await;
    let alerts = codes
        .iter()
        .flat_map(|code| by_park.remove(code).unwrap_or_default())
        .collect();
    Json(alerts)
}

/// Entrance coordinate of a park.
async fn park_entrance(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Entrance>, AppError> {
    let fetched = match &state.nps {
        Some(nps) => nps.entrance(&code).await,
        None => Err(NpsError::NotConfigured("NPS_API_KEY is unset".to_string())),
    };
    entrance_with_fallback(&code, fetched)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown park code: {code}"),
        })
}

/// Trails for parks by code, falling back to names.
async fn trails(State(state): State<AppState>, Query(req): Query<TrailsRequest>) -> Json<Vec<Trail>> {
    Json(
        state
            .trails
            .find(&split_list(&req.parks), &split_list(&req.names)),
    )
}

/// Driving route through the given waypoints.
async fn route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteSummary>, AppError> {
    let client = state.routing.as_ref().ok_or_else(|| {
        AppError::from(RoutingError::NotConfigured("MAPBOX_TOKEN is unset".to_string()))
    })?;
    let summary = client.route(&req.waypoints).await?;
    info!(
        waypoints = req.waypoints.len(),
        miles = summary.distance_miles(),
        "route computed"
    );
    Ok(Json(summary))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<AllocationError> for AppError {
    fn from(e: AllocationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::TooFewWaypoints(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
