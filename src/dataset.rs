//! Static reference data the scorer reads: roads, accident hotspots, safe
//! and construction zones, emergency services, and the time/weather/mode
//! tables.
//!
//! A dataset is never mutated once scoring starts. The built-in Chennai data
//! is available through [`CHENNAI`]; a JSON document of the same shape can
//! replace it with [`SafetyDataset::from_json_str`].

mod chennai;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use lazy_static::lazy_static;
use log::info;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::{Result, SafeRouteError};
use crate::geometry::{Coordinate, distance_meters};
use crate::mode::{TransportMode, WeatherCondition};
use crate::road_index::{RoadIndex, RoadIndexCell};
use crate::time::{TimeBand, TimeRange};

lazy_static! {
    pub static ref CHENNAI: SafetyDataset = chennai::dataset();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Frequency {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Lighting {
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaintenanceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskLevel {
    Medium,
    MediumHigh,
    High,
    VeryHigh,
    /// Any level not listed above. Carries no penalty.
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// Points taken off a route that passes through a zone of this level.
    pub fn penalty(self) -> f64 {
        match self {
            Self::VeryHigh => 2.5,
            Self::High => 1.5,
            Self::MediumHigh => 1.0,
            Self::Medium => 0.5,
            Self::Unknown => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub name: String,
    /// 1 (worst) to 10 (safest).
    pub safety_rating: u8,
    /// Human label such as `"4-lane"`.
    pub width_label: String,
    pub width_meters: f64,
    pub accident_frequency: Frequency,
    pub lighting: Lighting,
    pub maintenance_level: MaintenanceLevel,
    pub speed_limit_kph: u32,
    pub vehicle_compatibility: BTreeSet<TransportMode>,
    pub endpoints: [Coordinate; 2],
}

impl RoadSegment {
    pub fn allows(&self, mode: TransportMode) -> bool {
        self.vehicle_compatibility.contains(&mode)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskZone {
    pub name: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub accident_types: BTreeSet<String>,
    #[serde(default)]
    pub peak_hours: Vec<TimeRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub name: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub bonus: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionZone {
    pub name: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    /// Negative.
    pub penalty: f64,
    /// Free-form, e.g. `"2024-2026"`.
    pub duration: String,
    #[serde(default)]
    pub hazards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyServiceArea {
    pub name: String,
    pub center: Coordinate,
    pub radius_meters: f64,
    pub bonus: f64,
    #[serde(default)]
    pub services: Vec<String>,
}

/// A named hint for a known origin/destination pair, e.g. `T_Nagar_to_Adyar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaferAlternative {
    pub route: String,
    pub safety_bonus: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProfile {
    pub min_road_width_meters: f64,
    pub safety_multiplier: f64,
    /// Compatible roads at least this wide earn the wide-road bonus.
    pub width_bonus_threshold_meters: f64,
    #[serde(default)]
    pub preferred_road_types: Vec<String>,
    #[serde(default)]
    pub avoided_area_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSafetyFactor {
    pub multiplier: f64,
    pub reason: String,
}

/// Reference arterial used for the arterial-road bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArterialRoad {
    pub name: String,
    pub bounds: [Coordinate; 2],
}

/// Something with a center and a radius that a route can pass through.
pub trait CircularArea {
    fn center(&self) -> Coordinate;
    fn radius_meters(&self) -> f64;

    /// True when any coordinate lies strictly inside the radius.
    fn touched_by(&self, geometry: &[Coordinate]) -> bool {
        geometry
            .iter()
            .any(|&c| distance_meters(c, self.center()) < self.radius_meters())
    }
}

macro_rules! circular_area {
    ($($ty:ty),+) => {
        $(impl CircularArea for $ty {
            fn center(&self) -> Coordinate {
                self.center
            }

            fn radius_meters(&self) -> f64 {
                self.radius_meters
            }
        })+
    };
}

circular_area!(RiskZone, SafeZone, ConstructionZone, EmergencyServiceArea);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SafetyDataset {
    pub roads: Vec<RoadSegment>,
    pub risk_zones: Vec<RiskZone>,
    #[serde(default)]
    pub safe_zones: Vec<SafeZone>,
    #[serde(default)]
    pub construction_zones: Vec<ConstructionZone>,
    #[serde(default)]
    pub emergency_services: Vec<EmergencyServiceArea>,
    #[serde(default)]
    pub safer_alternatives: BTreeMap<String, Vec<SaferAlternative>>,
    pub time_factors: BTreeMap<TimeBand, TimeSafetyFactor>,
    pub weather_factors: BTreeMap<WeatherCondition, f64>,
    pub transport_profiles: BTreeMap<TransportMode, TransportProfile>,
    #[serde(default)]
    pub arterials: Vec<ArterialRoad>,
    #[serde(skip)]
    road_index: RoadIndexCell,
}

impl SafetyDataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SafeRouteError::Dataset(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SafeRouteError::Dataset(format!("{}: {e}", path.display())))?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            "Loaded dataset from {}: {} roads, {} risk zones",
            path.display(),
            dataset.roads.len(),
            dataset.risk_zones.len()
        );
        Ok(dataset)
    }

    /// Spatial index over `roads`, built on first use.
    pub fn road_index(&self) -> &RoadIndex {
        self.road_index.get_or_build(&self.roads)
    }

    /// Roads whose padded bounding box contains `point`.
    pub fn roads_near(&self, point: Coordinate) -> impl Iterator<Item = &RoadSegment> + '_ {
        self.road_index().near(point).map(|i| &self.roads[i])
    }

    pub fn profile(&self, mode: TransportMode) -> Option<&TransportProfile> {
        self.transport_profiles.get(&mode)
    }

    pub fn time_factor(&self, band: TimeBand) -> Option<&TimeSafetyFactor> {
        self.time_factors.get(&band)
    }

    /// Conditions missing from the table have no effect.
    pub fn weather_multiplier(&self, weather: WeatherCondition) -> f64 {
        self.weather_factors.get(&weather).copied().unwrap_or(1.0)
    }

    pub fn safer_alternatives(&self, key: &str) -> &[SaferAlternative] {
        self.safer_alternatives
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
