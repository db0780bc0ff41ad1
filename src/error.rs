//! Error types shared by the scoring core and its HTTP collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SafeRouteError {
    /// Only returned by strict parsing; lenient lookups fall back to car.
    #[error("unknown transport mode: {0}")]
    InvalidTransportMode(String),

    #[error("no route candidates to rank")]
    EmptyRouteSet,

    #[error("route geometry has no coordinates")]
    EmptyGeometry,

    #[error("invalid time range `{0}`, expected HH:MM-HH:MM")]
    InvalidTimeRange(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("routing failed: {0}")]
    Routing(String),

    #[error("geocoding failed: {0}")]
    Geocoding(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SafeRouteError>;
