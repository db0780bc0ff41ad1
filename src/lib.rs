//! Safety scoring for road routes in Chennai.
//!
//! Candidate routes (typically OSRM alternatives) are scored from 1 to 10
//! against a static dataset of roads, accident hotspots and time, weather and
//! transport-mode tables, then ranked so the safest comes first. Every score
//! carries the list of factors that produced it.
//!
//! ```no_run
//! use chrono::NaiveTime;
//! use saferoute::{Coordinate, RouteCandidate, TransportMode, WeatherCondition};
//!
//! let candidate = RouteCandidate::new(
//!     vec![Coordinate::new(13.0418, 80.2341), Coordinate::new(13.0012, 80.2565)],
//!     5400.0,
//!     900.0,
//! );
//! let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
//! let scored = saferoute::score_route(&candidate, TransportMode::Car, &noon, WeatherCondition::Clear)?;
//! println!("{:.1}: {:?}", scored.safety_score, scored.factors);
//! # Ok::<(), saferoute::SafeRouteError>(())
//! ```

pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod geocode;
pub mod geometry;
pub mod mode;
pub mod osrm;
pub mod ranker;
pub mod road_index;
pub mod route;
pub mod scorer;
pub mod server;
pub mod time;
pub mod width;

use chrono::Timelike;

pub use dataset::{CHENNAI, SafetyDataset};
pub use error::{Result, SafeRouteError};
pub use geometry::{Coordinate, distance_meters, is_near_segment};
pub use mode::{TransportMode, WeatherCondition};
pub use ranker::{RankedRoutes, rank_routes, select_safest};
pub use route::{RiskZoneHit, RouteCandidate, ScoredRoute};
pub use scorer::RouteScorer;
pub use time::{TimeBand, TimeRange};
pub use width::{WidthAssessment, analyze_width_compatibility};

/// Scores one candidate against the built-in Chennai dataset.
pub fn score_route<T: Timelike>(
    candidate: &RouteCandidate,
    mode: TransportMode,
    now: &T,
    weather: WeatherCondition,
) -> Result<ScoredRoute> {
    RouteScorer::new(&CHENNAI).score_route(candidate, mode, now, weather)
}

/// Scores and ranks candidates against the built-in Chennai dataset.
pub fn score_and_rank<T: Timelike>(
    candidates: &[RouteCandidate],
    mode: TransportMode,
    now: &T,
    weather: WeatherCondition,
) -> Result<RankedRoutes> {
    let scored = RouteScorer::new(&CHENNAI).score_all(candidates, mode, now, weather)?;
    rank_routes(scored)
}
