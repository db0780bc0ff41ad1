//! OSRM client that turns an origin and destination into route candidates.
//!
//! See <https://project-osrm.org/docs/v5.24.0/api/#route-service>

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::{Result, SafeRouteError};
use crate::geometry::Coordinate;
use crate::mode::TransportMode;
use crate::route::RouteCandidate;

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org/route/v1";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: LineString,
    distance: f64,
    duration: f64,
}

/// GeoJSON line; positions are `[lon, lat]`.
#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<[f64; 2]>,
}

impl From<OsrmRoute> for RouteCandidate {
    fn from(route: OsrmRoute) -> Self {
        let geometry = route
            .geometry
            .coordinates
            .into_iter()
            .map(Coordinate::from_lon_lat)
            .collect();
        RouteCandidate::new(geometry, route.distance, route.duration)
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    max_alternatives: usize,
}

impl OsrmClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, max_alternatives: usize) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_alternatives,
        }
    }

    /// Candidates for one trip, primary route first.
    ///
    /// Asks for alternatives and, if that yields nothing, retries for the
    /// primary route alone.
    ///
    /// # Errors
    ///
    /// [`SafeRouteError::Routing`] when both requests come back without
    /// routes, [`SafeRouteError::Http`] on transport or decoding failure.
    pub async fn fetch_candidates(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
    ) -> Result<Vec<RouteCandidate>> {
        let first = self.request(origin, destination, mode, true).await?;
        if !first.routes.is_empty() {
            return Ok(Self::candidates(first));
        }

        warn!(
            "OSRM returned no routes with alternatives ({}), retrying without",
            first.message.as_deref().unwrap_or(&first.code)
        );
        let retry = self.request(origin, destination, mode, false).await?;
        if retry.routes.is_empty() {
            return Err(SafeRouteError::Routing(
                retry.message.unwrap_or(retry.code),
            ));
        }
        Ok(Self::candidates(retry))
    }

    fn candidates(response: OsrmResponse) -> Vec<RouteCandidate> {
        let candidates: Vec<RouteCandidate> = response.routes.into_iter().map(RouteCandidate::from).collect();
        info!("OSRM returned {} route candidates", candidates.len());
        candidates
    }

    async fn request(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TransportMode,
        alternatives: bool,
    ) -> Result<OsrmResponse> {
        let url = format!(
            "{}/{}/{},{};{},{}",
            self.base_url,
            mode.osrm_profile(),
            origin.lon,
            origin.lat,
            destination.lon,
            destination.lat
        );
        debug!("OSRM request: {url} (alternatives: {alternatives})");

        let mut query = vec![
            ("overview", "full".to_string()),
            ("geometries", "geojson".to_string()),
            ("steps", "true".to_string()),
            ("alternatives", alternatives.to_string()),
        ];
        if alternatives {
            query.push(("alternative_count", self.max_alternatives.to_string()));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        if response.status().is_server_error() {
            return Err(SafeRouteError::Routing(format!(
                "OSRM responded with {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}
