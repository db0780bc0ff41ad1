use serde::{Deserialize, Serialize};

use crate::dataset::RiskLevel;
use crate::geometry::Coordinate;

/// One route option from the routing service. The scorer only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub geometry: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteCandidate {
    pub fn new(geometry: Vec<Coordinate>, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            geometry,
            distance_meters,
            duration_seconds,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    pub fn average_speed_kph(&self) -> f64 {
        (self.distance_meters / self.duration_seconds) * 3.6
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZoneHit {
    pub name: String,
    pub risk_level: RiskLevel,
    pub penalty: f64,
    /// Whether the scoring time fell inside one of the zone's peak hours.
    pub in_peak_hours: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRoute {
    pub candidate: RouteCandidate,
    /// Always within `1.0..=10.0`.
    pub safety_score: f64,
    /// Explanations in the order the adjustments were applied.
    pub factors: Vec<String>,
    pub risk_zones_hit: Vec<RiskZoneHit>,
}
