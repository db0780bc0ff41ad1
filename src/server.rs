//! HTTP API.
//!
//! `POST /score` ranks caller-supplied candidates. `POST /route` resolves the
//! two waypoints, asks OSRM for candidates and ranks those.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveTime};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::context::{RouteContext, route_context};
use crate::dataset::{SaferAlternative, SafetyDataset};
use crate::error::SafeRouteError;
use crate::geocode::Geocoder;
use crate::geometry::Coordinate;
use crate::mode::{TransportMode, WeatherCondition};
use crate::osrm::OsrmClient;
use crate::ranker::rank_routes;
use crate::route::{RouteCandidate, ScoredRoute};
use crate::scorer::RouteScorer;
use crate::time::TimeBand;

pub struct AppState {
    pub dataset: Arc<SafetyDataset>,
    pub osrm: OsrmClient,
    pub geocoder: Geocoder,
}

impl AppState {
    pub fn new(config: &Config, dataset: Arc<SafetyDataset>) -> Self {
        let http = reqwest::Client::new();
        Self {
            dataset,
            osrm: OsrmClient::new(http.clone(), config.osrm_url.clone(), config.max_alternatives),
            geocoder: Geocoder::new(http, config.photon_url.clone(), config.nominatim_url.clone()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/score", post(score_routes))
        .route("/route", post(plan_route))
        .route("/alternatives/:key", get(safer_alternatives))
        .layer(cors)
        .with_state(Arc::new(state))
}

// --- API DTOs ---

/// `[lat, lon]` or a place name to geocode.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Waypoint {
    Coordinates(Coordinate),
    Place(String),
}

/// Options shared by both scoring endpoints. Unknown modes and weather fall
/// back to car and clear.
#[derive(Debug, Default, Deserialize)]
pub struct ScoringOptions {
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    weather: Option<String>,
    /// `HH:MM`; the server's local time when absent.
    #[serde(default)]
    at: Option<String>,
}

struct ResolvedOptions {
    mode: TransportMode,
    weather: WeatherCondition,
    at: NaiveTime,
}

impl ScoringOptions {
    fn resolve(&self) -> Result<ResolvedOptions, ApiError> {
        let at = match &self.at {
            Some(at) => NaiveTime::parse_from_str(at.trim(), "%H:%M")
                .map_err(|_| ApiError::BadRequest(format!("invalid time `{at}`, expected HH:MM")))?,
            None => Local::now().time(),
        };
        Ok(ResolvedOptions {
            mode: self.mode.as_deref().map_or_else(TransportMode::default, TransportMode::parse_or_default),
            weather: self
                .weather
                .as_deref()
                .map_or_else(WeatherCondition::default, WeatherCondition::parse_or_default),
            at,
        })
    }
}

#[derive(Deserialize)]
struct ScoreRequest {
    routes: Vec<RouteCandidate>,
    #[serde(flatten)]
    options: ScoringOptions,
}

#[derive(Deserialize)]
struct PlanRequest {
    origin: Waypoint,
    destination: Waypoint,
    #[serde(flatten)]
    options: ScoringOptions,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub mode: TransportMode,
    pub weather: WeatherCondition,
    pub time_band: TimeBand,
    pub safest: ScoredRoute,
    pub alternatives: Vec<ScoredRoute>,
    /// Points of interest along the safest route.
    pub context: RouteContext,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub origin: Coordinate,
    pub destination: Coordinate,
    #[serde(flatten)]
    pub ranking: RankingResponse,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub safer_alternatives: Vec<SaferAlternative>,
}

// --- Errors ---

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Core(SafeRouteError),
}

impl From<SafeRouteError> for ApiError {
    fn from(e: SafeRouteError) -> Self {
        Self::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Core(e) => {
                let status = match e {
                    SafeRouteError::InvalidTransportMode(_)
                    | SafeRouteError::EmptyRouteSet
                    | SafeRouteError::EmptyGeometry
                    | SafeRouteError::InvalidTimeRange(_) => StatusCode::BAD_REQUEST,
                    SafeRouteError::Routing(_) | SafeRouteError::Geocoding(_) | SafeRouteError::Http(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                    SafeRouteError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    error!("Request failed: {e}");
                }
                (status, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// --- Handlers ---

fn rank(
    dataset: &SafetyDataset,
    candidates: &[RouteCandidate],
    options: &ResolvedOptions,
) -> Result<RankingResponse, ApiError> {
    let scored = RouteScorer::new(dataset).score_all(candidates, options.mode, &options.at, options.weather)?;
    let ranked = rank_routes(scored)?.into_vec();
    let mut ranked = ranked.into_iter();
    let safest = ranked.next().ok_or(SafeRouteError::EmptyRouteSet)?;

    Ok(RankingResponse {
        mode: options.mode,
        weather: options.weather,
        time_band: TimeBand::at(&options.at),
        context: route_context(dataset, &safest.candidate.geometry),
        safest,
        alternatives: ranked.collect(),
    })
}

async fn score_routes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<RankingResponse>, ApiError> {
    let options = request.options.resolve()?;
    info!(
        "Scoring {} routes for {} at {}",
        request.routes.len(),
        options.mode,
        options.at.format("%H:%M")
    );
    rank(&state.dataset, &request.routes, &options).map(Json)
}

/// `T Nagar` and `Adyar` give `T_Nagar_to_Adyar`.
fn alternatives_key(origin: &str, destination: &str) -> String {
    let slug = |s: &str| s.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_to_{}", slug(origin), slug(destination))
}

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let options = request.options.resolve()?;

    let (origin, destination) = match (&request.origin, &request.destination) {
        (Waypoint::Coordinates(o), Waypoint::Coordinates(d)) => (*o, *d),
        (Waypoint::Place(o), Waypoint::Place(d)) => {
            let (o, d) = state.geocoder.resolve_pair(o, d).await?;
            (o.location, d.location)
        }
        (Waypoint::Coordinates(o), Waypoint::Place(d)) => (*o, state.geocoder.resolve(d).await?.location),
        (Waypoint::Place(o), Waypoint::Coordinates(d)) => (state.geocoder.resolve(o).await?.location, *d),
    };

    let safer_alternatives = match (&request.origin, &request.destination) {
        (Waypoint::Place(o), Waypoint::Place(d)) => state.dataset.safer_alternatives(&alternatives_key(o, d)).to_vec(),
        _ => Vec::new(),
    };

    let candidates = state.osrm.fetch_candidates(origin, destination, options.mode).await?;
    let ranking = rank(&state.dataset, &candidates, &options)?;
    info!(
        "Safest of {} routes scored {:.1}",
        candidates.len(),
        ranking.safest.safety_score
    );

    Ok(Json(PlanResponse {
        origin,
        destination,
        ranking,
        safer_alternatives,
    }))
}

async fn safer_alternatives(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<Vec<SaferAlternative>>, ApiError> {
    let hints = state.dataset.safer_alternatives(&key);
    if hints.is_empty() {
        return Err(ApiError::NotFound(format!("no safer alternatives for `{key}`")));
    }
    Ok(Json(hints.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waypoint_accepts_coordinates_or_place() {
        let w: Waypoint = serde_json::from_str("[13.0418, 80.2341]").unwrap();
        assert!(matches!(w, Waypoint::Coordinates(c) if c == Coordinate::new(13.0418, 80.2341)));
        let w: Waypoint = serde_json::from_str("\"T Nagar\"").unwrap();
        assert!(matches!(w, Waypoint::Place(p) if p == "T Nagar"));
    }

    #[test]
    fn options_fall_back_leniently() {
        let options = ScoringOptions {
            mode: Some("hovercraft".to_string()),
            weather: Some("snow".to_string()),
            at: Some("08:30".to_string()),
        }
        .resolve()
        .unwrap();
        assert_eq!(options.mode, TransportMode::Car);
        assert_eq!(options.weather, WeatherCondition::Clear);
        assert_eq!(options.at, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn bad_time_is_rejected() {
        let options = ScoringOptions {
            at: Some("half past eight".to_string()),
            ..Default::default()
        };
        assert!(matches!(options.resolve(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn alternatives_key_from_place_names() {
        assert_eq!(alternatives_key("T Nagar", "Adyar"), "T_Nagar_to_Adyar");
        assert_eq!(alternatives_key(" Egmore ", "Besant  Nagar"), "Egmore_to_Besant_Nagar");
    }
}
