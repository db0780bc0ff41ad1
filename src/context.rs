//! Points of interest a route passes through. Shown alongside the score but
//! never folded into it.

use serde::Serialize;

use crate::dataset::{CircularArea, SafetyDataset};
use crate::geometry::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextArea {
    pub name: String,
    /// Signed: positive for safe zones and services, negative for construction.
    pub adjustment: f64,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteContext {
    pub safe_zones: Vec<ContextArea>,
    pub construction_zones: Vec<ContextArea>,
    pub emergency_services: Vec<ContextArea>,
}

impl RouteContext {
    pub fn is_empty(&self) -> bool {
        self.safe_zones.is_empty() && self.construction_zones.is_empty() && self.emergency_services.is_empty()
    }
}

fn touched<A: CircularArea>(
    areas: &[A],
    geometry: &[Coordinate],
    describe: impl Fn(&A) -> ContextArea,
) -> Vec<ContextArea> {
    areas
        .iter()
        .filter(|a| a.touched_by(geometry))
        .map(describe)
        .collect()
}

pub fn route_context(dataset: &SafetyDataset, geometry: &[Coordinate]) -> RouteContext {
    RouteContext {
        safe_zones: touched(&dataset.safe_zones, geometry, |z| ContextArea {
            name: z.name.clone(),
            adjustment: z.bonus,
            details: z.features.clone(),
        }),
        construction_zones: touched(&dataset.construction_zones, geometry, |z| ContextArea {
            name: z.name.clone(),
            adjustment: z.penalty,
            details: z.hazards.clone(),
        }),
        emergency_services: touched(&dataset.emergency_services, geometry, |s| ContextArea {
            name: s.name.clone(),
            adjustment: s.bonus,
            details: s.services.clone(),
        }),
    }
}
