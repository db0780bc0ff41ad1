//! Route safety scoring.
//!
//! A route starts at [`BASE_SCORE`] and is adjusted by each heuristic in a
//! fixed order. Every adjustment that fires appends a line to
//! [`ScoredRoute::factors`], so the factor list doubles as an audit trail of
//! how the number was reached. The result is clamped to `1.0..=10.0`.

use chrono::Timelike;
use log::debug;

use crate::dataset::{CircularArea, SafetyDataset};
use crate::error::{Result, SafeRouteError};
use crate::geometry::{Coordinate, is_near_segment};
use crate::mode::{TransportMode, WeatherCondition};
use crate::route::{RiskZoneHit, RouteCandidate, ScoredRoute};
use crate::time::TimeBand;
use crate::width::{WidthAssessment, analyze_width_compatibility};

pub const BASE_SCORE: f64 = 7.0;
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

const LONG_ROUTE_KM: f64 = 10.0;
const MAX_LONG_ROUTE_PENALTY: f64 = 2.0;
const SPEED_PENALTY: f64 = 1.5;
const ARTERIAL_BONUS: f64 = 1.5;
const ARTERIAL_TOLERANCE_METERS: f64 = 200.0;
const ARTERIAL_SHARE: f64 = 0.3;

/// Rounds half away from zero, so `2.25` shows as `2.3` rather than `2.2`.
fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `+0.4`, `-0.6`, `0.0`.
fn signed(value: f64) -> String {
    let value = one_decimal(value);
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

/// Running total plus the explanation log.
struct Tally {
    total: f64,
    factors: Vec<String>,
}

impl Tally {
    fn apply(&mut self, delta: f64, factor: String) {
        debug!("{factor}");
        self.total += delta;
        self.factors.push(factor);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteScorer<'a> {
    dataset: &'a SafetyDataset,
}

impl<'a> RouteScorer<'a> {
    pub fn new(dataset: &'a SafetyDataset) -> Self {
        Self { dataset }
    }

    pub fn analyze_width_compatibility(&self, route: &[Coordinate], mode: TransportMode) -> WidthAssessment {
        analyze_width_compatibility(self.dataset, route, mode)
    }

    /// Scores one candidate. Same inputs always give the same score and factors.
    ///
    /// # Errors
    ///
    /// [`SafeRouteError::EmptyGeometry`] if the candidate has no coordinates.
    pub fn score_route<T: Timelike>(
        &self,
        candidate: &RouteCandidate,
        mode: TransportMode,
        now: &T,
        weather: WeatherCondition,
    ) -> Result<ScoredRoute> {
        let geometry = candidate.geometry.as_slice();
        if geometry.is_empty() {
            return Err(SafeRouteError::EmptyGeometry);
        }

        let mut tally = Tally {
            total: BASE_SCORE,
            factors: Vec::new(),
        };

        let width = self.analyze_width_compatibility(geometry, mode);
        if width.score != 0.0 {
            tally.apply(
                width.score,
                format!("Road width compatibility: {} - {}", signed(width.score), width.reason),
            );
        }

        let risk_zones_hit = self.risk_zones_hit(geometry, now);
        let risk_penalty: f64 = risk_zones_hit.iter().map(|z| z.penalty).sum();
        if risk_penalty > 0.0 {
            tally.apply(-risk_penalty, format!("Risk zones penalty: -{:.1}", one_decimal(risk_penalty)));
        }

        let band = TimeBand::at(now);
        if let Some(factor) = self.dataset.time_factor(band) {
            let bonus = (factor.multiplier - 1.0) * 2.0;
            tally.apply(
                bonus,
                format!("Time factor ({band}): {} - {}", signed(bonus), factor.reason),
            );
        }

        let weather_multiplier = self.dataset.weather_multiplier(weather);
        if weather_multiplier != 1.0 {
            let bonus = (weather_multiplier - 1.0) * 3.0;
            tally.apply(bonus, format!("Weather ({weather}): {}", signed(bonus)));
        }

        if let Some(profile) = self.dataset.profile(mode) {
            let bonus = (profile.safety_multiplier - 0.8) * 2.0;
            tally.apply(bonus, format!("Transport mode ({mode}): {}", signed(bonus)));
        }

        let km = candidate.distance_km();
        if km > LONG_ROUTE_KM {
            let penalty = ((km - LONG_ROUTE_KM) * 0.1).min(MAX_LONG_ROUTE_PENALTY);
            tally.apply(-penalty, format!("Long route penalty: -{:.1}", one_decimal(penalty)));
        }

        if candidate.average_speed_kph() > mode.expected_speed_kph() * 1.2 {
            tally.apply(
                -SPEED_PENALTY,
                format!("High speed route penalty: -{SPEED_PENALTY}"),
            );
        }

        if self.uses_main_arterials(geometry) {
            tally.apply(
                ARTERIAL_BONUS,
                format!("Major arterial roads bonus: +{ARTERIAL_BONUS}"),
            );
        }

        let safety_score = tally.total.clamp(MIN_SCORE, MAX_SCORE);
        debug!(
            "Scored {:.1} km {mode} route: raw {:.2}, final {safety_score:.1}",
            km, tally.total
        );

        Ok(ScoredRoute {
            candidate: candidate.clone(),
            safety_score,
            factors: tally.factors,
            risk_zones_hit,
        })
    }

    /// Scores candidates in input order, stopping at the first invalid one.
    pub fn score_all<T: Timelike>(
        &self,
        candidates: &[RouteCandidate],
        mode: TransportMode,
        now: &T,
        weather: WeatherCondition,
    ) -> Result<Vec<ScoredRoute>> {
        debug!("Analyzing {} routes for safety factors", candidates.len());
        candidates
            .iter()
            .map(|c| self.score_route(c, mode, now, weather))
            .collect()
    }

    fn risk_zones_hit<T: Timelike>(&self, geometry: &[Coordinate], now: &T) -> Vec<RiskZoneHit> {
        self.dataset
            .risk_zones
            .iter()
            .filter(|zone| zone.touched_by(geometry))
            .map(|zone| RiskZoneHit {
                name: zone.name.clone(),
                risk_level: zone.risk_level,
                penalty: zone.risk_level.penalty(),
                in_peak_hours: zone.peak_hours.iter().any(|r| r.contains(now)),
            })
            .collect()
    }

    /// Counts (coordinate, arterial) matches, so a point inside two overlapping
    /// arterial boxes counts twice.
    fn uses_main_arterials(&self, geometry: &[Coordinate]) -> bool {
        let hits = geometry
            .iter()
            .flat_map(|&point| {
                self.dataset
                    .arterials
                    .iter()
                    .filter(move |a| is_near_segment(point, a.bounds, ARTERIAL_TOLERANCE_METERS))
            })
            .count();

        hits as f64 / geometry.len() as f64 > ARTERIAL_SHARE
    }
}
